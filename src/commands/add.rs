//! Add command - create a new recipe

use crate::{
    CookbookError,
    app::{ActionResult, AppContext},
    cli::RecipeFields,
    output,
};

type Result<T> = std::result::Result<T, CookbookError>;

/// Execute the add command
///
/// # Arguments
/// * `app` - Application context
/// * `title` - Title of the new recipe
/// * `fields` - Description, ingredients, steps and tags from the command line
/// * `quiet` - Suppress informational output
///
/// # Errors
/// Returns `StoreError::EmptyTitle` for a blank title and
/// `StoreError::TitleConflict` if the title is taken
pub fn execute(app: &mut AppContext, title: &str, fields: &RecipeFields, quiet: bool) -> Result<()> {
    let action = fields.new_draft(title).into_action()?;

    if let ActionResult::Saved(saved) = app.dispatch(action)?
        && !quiet
    {
        println!("{}", output::success(&format!("Added recipe '{saved}'")));
    }
    Ok(())
}
