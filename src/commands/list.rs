//! List command - all recipes with their tags

use crate::{CookbookError, app::AppContext, output};

type Result<T> = std::result::Result<T, CookbookError>;

/// Execute the list command
///
/// # Errors
/// Never fails today; returns `Result` to match the other commands.
pub fn execute(app: &AppContext, quiet: bool) -> Result<()> {
    let store = app.store();

    if store.is_empty() {
        if !quiet {
            println!("No recipes found.");
        }
        return Ok(());
    }

    if !quiet {
        println!("Recipes ({}):", store.len());
    }
    for recipe in store.all() {
        println!("{}", output::recipe_with_tags(recipe, quiet));
    }
    Ok(())
}
