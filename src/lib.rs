//! Cookbook - a recipe manager with tag filtering and search
//!
//! This library keeps a collection of recipes keyed by title, persists it
//! to an XML file and filters it by tag selection and text query.
//!
//! - [`store::RecipeStore`]: CRUD with title uniqueness, load and atomic save
//! - [`search`]: tag and query filter passes plus selection state
//! - [`app::AppContext`]: owns the store and search state; applies [`app::Action`]s

use thiserror::Error;

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod output;
pub mod recipe;
pub mod search;
pub mod store;

#[cfg(test)]
pub mod testing;

pub use app::{Action, ActionResult, AppContext};
pub use recipe::{Recipe, RecipeDraft};
pub use store::{LoadError, RecipeStore, SaveError, StoreError};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum CookbookError {
    /// Recipe store error
    #[error("{0}")]
    Store(StoreError),
    /// The recipes file could not be loaded
    #[error("{}", .0.user_message())]
    Load(#[from] LoadError),
    /// The recipes file could not be saved
    #[error("{}", .0.user_message())]
    Save(#[from] SaveError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Logging could not be set up
    #[error(transparent)]
    Logging(#[from] logging::LoggingError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<StoreError> for CookbookError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Load(e) => Self::Load(e),
            StoreError::Save(e) => Self::Save(e),
            other => Self::Store(other),
        }
    }
}
