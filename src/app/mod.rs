//! Application context
//!
//! [`AppContext`] is built once at startup and handed to every command. It
//! owns the recipe store, the derived search state and the path of the
//! recipes file. Front ends change state only by dispatching [`Action`]s;
//! after every store mutation the search state is refreshed.
//!
//! ```no_run
//! use cookbook::app::{Action, AppContext};
//! use cookbook::recipe::Recipe;
//!
//! let mut app = AppContext::open("recipes.xml").unwrap();
//! app.dispatch(Action::Create(Recipe::new("Soup", "Hot"))).unwrap();
//! app.shutdown().unwrap();
//! ```

pub mod actions;

use std::path::{Path, PathBuf};

use crate::search::SearchState;
use crate::store::{LoadError, RecipeStore, SaveError, StoreError};
pub use actions::{Action, ActionResult};

/// Owned application state
#[derive(Debug)]
pub struct AppContext {
    store: RecipeStore,
    search: SearchState,
    recipes_path: PathBuf,
    dirty: bool,
}

impl AppContext {
    /// Load the recipes file and build the context
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the file exists but cannot be loaded. Callers
    /// must not continue with a partial store.
    pub fn open(recipes_path: impl Into<PathBuf>) -> Result<Self, LoadError> {
        let recipes_path = recipes_path.into();
        let store = RecipeStore::open(&recipes_path)?;
        Ok(Self::with_store(store, recipes_path))
    }

    /// Build a context around an existing store
    #[must_use]
    pub fn with_store(store: RecipeStore, recipes_path: impl Into<PathBuf>) -> Self {
        let search = SearchState::new(&store);
        Self {
            store,
            search,
            recipes_path: recipes_path.into(),
            dirty: false,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &RecipeStore {
        &self.store
    }

    #[must_use]
    pub const fn search(&self) -> &SearchState {
        &self.search
    }

    #[must_use]
    pub fn recipes_path(&self) -> &Path {
        &self.recipes_path
    }

    /// Whether the store changed since it was loaded or last saved
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Titles currently passing the tag and query filters
    #[must_use]
    pub fn visible_titles(&self) -> Vec<String> {
        self.search.results(&self.store)
    }

    /// Apply an action
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if a create or update is rejected. The store and
    /// search state are unchanged in that case.
    pub fn dispatch(&mut self, action: Action) -> Result<ActionResult, StoreError> {
        tracing::debug!(action = action.name(), "dispatching action");
        let mutates = action.mutates_store();

        let result = match action {
            Action::Create(recipe) => {
                let title = recipe.title.clone();
                self.store.create(recipe)?;
                ActionResult::Saved(title)
            }
            Action::Update { original, recipe } => {
                let title = recipe.title.clone();
                self.store.update(&original, recipe)?;
                ActionResult::Saved(title)
            }
            Action::Delete(title) => {
                let existed = self.store.delete(&title).is_some();
                ActionResult::Deleted { title, existed }
            }
            Action::View(title) => ActionResult::Viewed(self.store.get(&title).cloned()),
            Action::SetQuery(query) => {
                self.search.set_query(&query);
                ActionResult::SelectionChanged
            }
            Action::ToggleTag(tag) => {
                self.search.toggle_tag(&tag);
                ActionResult::SelectionChanged
            }
            Action::ToggleUntagged => {
                self.search.toggle_untagged();
                ActionResult::SelectionChanged
            }
            Action::SelectAllTags => {
                self.search.select_all();
                ActionResult::SelectionChanged
            }
            Action::DeselectAllTags => {
                self.search.deselect_all();
                ActionResult::SelectionChanged
            }
            Action::InvertTagSelection => {
                self.search.invert();
                ActionResult::SelectionChanged
            }
        };

        if mutates && !matches!(result, ActionResult::Deleted { existed: false, .. }) {
            self.search.refresh(&self.store);
            self.dirty = true;
        }

        Ok(result)
    }

    /// Save the store to the recipes file
    ///
    /// # Errors
    ///
    /// Returns `SaveError` if the write fails. The in-memory store is kept
    /// and remains dirty, so saving can be retried.
    pub fn save(&mut self) -> Result<(), SaveError> {
        self.store.save(&self.recipes_path)?;
        self.dirty = false;
        Ok(())
    }

    /// Flush pending changes at the end of a session
    ///
    /// Does nothing if the store is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `SaveError` if the write fails.
    pub fn shutdown(&mut self) -> Result<(), SaveError> {
        if self.dirty {
            self.save()
        } else {
            tracing::debug!("no changes to save");
            Ok(())
        }
    }
}
