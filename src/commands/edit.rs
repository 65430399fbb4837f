//! Edit command - replace fields of an existing recipe

use crate::{
    CookbookError,
    app::{ActionResult, AppContext},
    cli::RecipeFields,
    output,
    recipe::RecipeDraft,
    store::StoreError,
};

type Result<T> = std::result::Result<T, CookbookError>;

/// Changes requested for an existing recipe
#[derive(Debug, Clone)]
pub struct EditRequest<'a> {
    pub new_title: Option<&'a str>,
    pub fields: &'a RecipeFields,
    pub clear_tags: bool,
}

/// Execute the edit command
///
/// Only fields given on the command line change; a new title renames the recipe.
///
/// # Errors
/// Returns `StoreError::NotFound` if the recipe doesn't exist,
/// `StoreError::EmptyTitle` for a blank new title and
/// `StoreError::TitleConflict` if the new title belongs to another recipe
pub fn execute(app: &mut AppContext, title: &str, request: &EditRequest<'_>, quiet: bool) -> Result<()> {
    let existing = app
        .store()
        .get(title)
        .ok_or_else(|| StoreError::NotFound(title.to_string()))?;

    let mut draft = RecipeDraft::from_recipe(existing);
    request.fields.apply_to(&mut draft);
    if let Some(new_title) = request.new_title {
        draft.title = new_title.to_string();
    }
    if request.clear_tags {
        draft.tags_text.clear();
    }

    if let ActionResult::Saved(saved) = app.dispatch(draft.into_action()?)?
        && !quiet
    {
        let message = if saved == title {
            format!("Updated recipe '{saved}'")
        } else {
            format!("Renamed recipe '{title}' to '{saved}'")
        };
        println!("{}", output::success(&message));
    }
    Ok(())
}
