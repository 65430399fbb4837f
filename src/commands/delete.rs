//! Delete command - remove a recipe

use crate::{
    CookbookError,
    app::{Action, ActionResult, AppContext},
    output,
};
use dialoguer::Confirm;

type Result<T> = std::result::Result<T, CookbookError>;

/// Execute the delete command
///
/// Asks for confirmation unless `force` or `quiet` is set. Deleting a title
/// that doesn't exist is not an error.
///
/// # Errors
/// Returns an error if the confirmation prompt fails
pub fn execute(app: &mut AppContext, title: &str, force: bool, quiet: bool) -> Result<()> {
    if !app.store().contains(title) {
        if !quiet {
            println!("No recipe titled '{title}'.");
        }
        return Ok(());
    }

    if !force && !quiet && !confirm(&format!("Delete recipe '{title}'?"))? {
        println!("Cancelled.");
        return Ok(());
    }

    if let ActionResult::Deleted { title, existed: true } = app.dispatch(Action::Delete(title.to_string()))?
        && !quiet
    {
        println!("{}", output::success(&format!("Deleted recipe '{title}'")));
    }
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CookbookError::InvalidInput(format!("Confirmation failed: {e}")))
}
