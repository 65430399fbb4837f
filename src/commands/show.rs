//! Show command - display a single recipe

use crate::{
    CookbookError,
    app::{Action, ActionResult, AppContext},
    output,
    store::StoreError,
};

type Result<T> = std::result::Result<T, CookbookError>;

/// Execute the show command
///
/// # Errors
/// Returns `StoreError::NotFound` if no recipe has this title
pub fn execute(app: &mut AppContext, title: &str, quiet: bool) -> Result<()> {
    let ActionResult::Viewed(recipe) = app.dispatch(Action::View(title.to_string()))? else {
        return Err(CookbookError::InvalidInput(format!("Unexpected result viewing '{title}'")));
    };

    let Some(recipe) = recipe else {
        return Err(StoreError::NotFound(title.to_string()).into());
    };

    let rendered = output::render_recipe(Some(&recipe));
    if quiet {
        print!("{rendered}");
    } else {
        print!("{}", output::colorize_recipe(&rendered));
    }
    Ok(())
}
