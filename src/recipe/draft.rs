//! Editor input prior to validation
//!
//! A [`RecipeDraft`] carries raw form values. Committing it produces either a
//! create or an update action depending on whether an existing recipe was
//! being edited.

use super::{Recipe, format_tag_list, parse_tag_list};
use crate::app::Action;
use crate::store::StoreError;

/// Raw editor state for a new or existing recipe
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    /// Title of the recipe being edited, `None` for a new recipe
    pub editing: Option<String>,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub procedure: Vec<String>,
    /// `;`-separated tag text
    pub tags_text: String,
}

impl RecipeDraft {
    /// Empty draft for a new recipe
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft prefilled from an existing recipe
    #[must_use]
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            editing: Some(recipe.title.clone()),
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            ingredients: recipe.ingredients.clone(),
            procedure: recipe.procedure.clone(),
            tags_text: format_tag_list(recipe.tags()),
        }
    }

    #[must_use]
    pub const fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    /// Build the recipe described by this draft
    ///
    /// The title is trimmed. Blank ingredient and step lines are dropped.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyTitle` if the title is blank.
    pub fn to_recipe(&self) -> Result<Recipe, StoreError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }

        Ok(Recipe::new(title, self.description.as_str())
            .with_ingredients(non_blank(&self.ingredients))
            .with_procedure(non_blank(&self.procedure))
            .with_tags(parse_tag_list(&self.tags_text)))
    }

    /// Turn this draft into the action that saves it
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyTitle` if the title is blank.
    pub fn into_action(self) -> Result<Action, StoreError> {
        let recipe = self.to_recipe()?;
        Ok(match self.editing {
            Some(original) => Action::Update { original, recipe },
            None => Action::Create(recipe),
        })
    }
}

fn non_blank(lines: &[String]) -> impl Iterator<Item = &str> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
}
