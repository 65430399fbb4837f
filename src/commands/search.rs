//! Search command - filter recipes by tags and text

use std::collections::BTreeSet;

use crate::{
    CookbookError,
    app::{Action, AppContext},
    output,
    recipe::parse_tag_list,
};

type Result<T> = std::result::Result<T, CookbookError>;

/// Parameters for the search command
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Text to find in titles and descriptions
    pub query: Option<String>,
    /// Tags to select; empty (with `untagged` unset) selects everything
    pub tags: Vec<String>,
    /// Include recipes without tags
    pub untagged: bool,
    /// Invert the tag selection before filtering
    pub invert: bool,
}

/// Apply search parameters to the context and return the matching titles
///
/// # Errors
/// Dispatching selection actions does not fail; errors are propagated for
/// consistency with store actions.
pub fn run(app: &mut AppContext, params: &SearchParams) -> Result<Vec<String>> {
    let requested: BTreeSet<String> = params
        .tags
        .iter()
        .flat_map(|t| parse_tag_list(t))
        .collect();

    if requested.is_empty() && !params.untagged {
        app.dispatch(Action::SelectAllTags)?;
    } else {
        app.dispatch(Action::DeselectAllTags)?;
        for tag in requested {
            if !app.search().all_tags().contains(&tag) {
                tracing::warn!(tag = %tag, "no recipe uses this tag");
            }
            app.dispatch(Action::ToggleTag(tag))?;
        }
        if params.untagged {
            app.dispatch(Action::ToggleUntagged)?;
        }
    }

    if params.invert {
        app.dispatch(Action::InvertTagSelection)?;
    }

    app.dispatch(Action::SetQuery(params.query.clone().unwrap_or_default()))?;
    Ok(app.visible_titles())
}

/// Execute the search command
///
/// # Errors
/// See [`run`].
pub fn execute(app: &mut AppContext, params: &SearchParams, quiet: bool) -> Result<()> {
    let titles = run(app, params)?;

    if titles.is_empty() {
        if !quiet {
            println!("No recipes found.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Found {} recipe(s):", titles.len());
    }
    for title in &titles {
        if let Some(recipe) = app.store().get(title) {
            println!("{}", output::recipe_with_tags(recipe, quiet));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{TempRecipesFile, sample_store};

    fn app() -> (TempRecipesFile, AppContext) {
        let file = TempRecipesFile::new();
        let app = AppContext::with_store(sample_store(), file.path());
        (file, app)
    }

    #[test]
    fn test_default_shows_everything() {
        let (_file, mut app) = app();
        let titles = run(&mut app, &SearchParams::default()).unwrap();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_single_tag() {
        let (_file, mut app) = app();
        let params = SearchParams {
            tags: vec!["Italian".into()],
            ..SearchParams::default()
        };
        assert_eq!(run(&mut app, &params).unwrap(), vec!["A"]);
    }

    #[test]
    fn test_untagged_only() {
        let (_file, mut app) = app();
        let params = SearchParams {
            untagged: true,
            ..SearchParams::default()
        };
        assert_eq!(run(&mut app, &params).unwrap(), vec!["B"]);
    }

    #[test]
    fn test_inverted_tags() {
        let (_file, mut app) = app();
        let params = SearchParams {
            tags: vec!["italian; easy".into()],
            invert: true,
            ..SearchParams::default()
        };
        assert_eq!(run(&mut app, &params).unwrap(), vec!["B", "C"]);
    }

    #[test]
    fn test_query_with_tags() {
        let (_file, mut app) = app();
        let params = SearchParams {
            query: Some("Des".into()),
            ..SearchParams::default()
        };
        assert_eq!(run(&mut app, &params).unwrap(), vec!["C"]);
    }

    #[test]
    fn test_repeated_tag_stays_selected() {
        let (_file, mut app) = app();
        let params = SearchParams {
            tags: vec!["dessert".into(), "Dessert".into()],
            ..SearchParams::default()
        };
        assert_eq!(run(&mut app, &params).unwrap(), vec!["C"]);
    }

    #[test]
    fn test_unknown_tag_matches_nothing() {
        let (_file, mut app) = app();
        let params = SearchParams {
            tags: vec!["vegan".into()],
            ..SearchParams::default()
        };
        assert!(run(&mut app, &params).unwrap().is_empty());
    }
}
