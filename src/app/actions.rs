//! Action types dispatched through the application context.

use crate::recipe::Recipe;

/// Everything a front end can ask the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Insert a new recipe
    Create(Recipe),
    /// Replace the recipe stored under `original`
    Update { original: String, recipe: Recipe },
    /// Remove a recipe by title
    Delete(String),
    /// Look up a recipe for display
    View(String),

    /// Set the text query
    SetQuery(String),
    /// Flip a single tag in the selection
    ToggleTag(String),
    /// Flip the untagged pseudo-tag
    ToggleUntagged,
    /// Select every tag and untagged recipes
    SelectAllTags,
    /// Clear the tag selection
    DeselectAllTags,
    /// Invert the tag selection
    InvertTagSelection,
}

impl Action {
    /// Whether this action can change the store.
    #[must_use]
    pub const fn mutates_store(&self) -> bool {
        matches!(self, Self::Create(_) | Self::Update { .. } | Self::Delete(_))
    }

    /// Short description for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Create(_) => "create",
            Self::Update { .. } => "update",
            Self::Delete(_) => "delete",
            Self::View(_) => "view",
            Self::SetQuery(_) => "set-query",
            Self::ToggleTag(_) => "toggle-tag",
            Self::ToggleUntagged => "toggle-untagged",
            Self::SelectAllTags => "select-all",
            Self::DeselectAllTags => "deselect-all",
            Self::InvertTagSelection => "invert",
        }
    }
}

/// Result of dispatching an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult {
    /// A recipe was created or updated under this title
    Saved(String),
    /// A recipe was removed; `false` if nothing had that title
    Deleted { title: String, existed: bool },
    /// Lookup result; `None` if the recipe no longer exists
    Viewed(Option<Recipe>),
    /// The query or tag selection changed
    SelectionChanged,
}
