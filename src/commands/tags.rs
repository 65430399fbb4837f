//! Tags command - list tags with usage counts

use crate::{CookbookError, app::AppContext, output, search::UNTAGGED_LABEL, store::RecipeStore};

type Result<T> = std::result::Result<T, CookbookError>;

/// Execute the tags command
///
/// The untagged pseudo-tag is listed last when any recipe has no tags.
///
/// # Errors
/// Never fails today; returns `Result` to match the other commands.
pub fn execute(app: &AppContext, quiet: bool) -> Result<()> {
    let lines = tag_lines(app.store(), quiet);

    if lines.is_empty() {
        if !quiet {
            println!("No tags found.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Tags:");
    }
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// One line per tag, plus the untagged count unless `quiet`
fn tag_lines(store: &RecipeStore, quiet: bool) -> Vec<String> {
    let untagged = store.all().filter(|recipe| !recipe.has_tags()).count();

    let mut lines: Vec<String> = store
        .tag_counts()
        .iter()
        .map(|(tag, count)| output::tag_with_count(tag, *count, quiet))
        .collect();
    if untagged > 0 && !quiet {
        lines.push(output::tag_with_count(UNTAGGED_LABEL, untagged, quiet));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;
    use crate::testing::{TempRecipesFile, sample_store};

    #[test]
    fn test_tag_lines_count_untagged_last() {
        let mut store = sample_store();
        store.create(Recipe::new("D", "Toast")).unwrap();

        let lines = tag_lines(&store, false);
        assert_eq!(
            lines,
            vec![
                "  dessert (used by 1 recipe(s))",
                "  easy (used by 1 recipe(s))",
                "  italian (used by 1 recipe(s))",
                "  (untagged) (used by 2 recipe(s))",
            ]
        );
    }

    #[test]
    fn test_tag_lines_quiet_lists_real_tags_only() {
        assert_eq!(tag_lines(&sample_store(), true), vec!["dessert", "easy", "italian"]);
    }

    #[test]
    fn test_tag_lines_without_untagged_recipes() {
        let mut store = sample_store();
        store.delete("B");
        let lines = tag_lines(&store, false);
        assert!(lines.iter().all(|line| !line.contains(UNTAGGED_LABEL)));
    }

    #[test]
    fn test_execute_on_empty_store() {
        let file = TempRecipesFile::new();
        let app = AppContext::with_store(RecipeStore::new(), file.path());
        assert!(tag_lines(app.store(), false).is_empty());
        execute(&app, true).unwrap();
    }
}
