//! Recipe store error types
//!
//! # Error Types
//!
//! - **`StoreError`**: CRUD failures (title conflicts, blank titles, missing recipes)
//!   plus wrapped persistence failures
//! - **`LoadError`**: The recipes file exists but cannot be read or parsed
//! - **`SaveError`**: The recipes file cannot be written
//!
//! A `LoadError` is fatal at startup. A `SaveError` leaves the in-memory
//! store untouched so the caller can report it and retry.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from recipe store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Another recipe already uses this title
    #[error("A recipe with the title '{0}' already exists")]
    TitleConflict(String),

    /// Recipes must have a non-blank title
    #[error("Please enter a title for the recipe")]
    EmptyTitle,

    /// No recipe with this title
    #[error("Recipe not found: {0}")]
    NotFound(String),

    /// Loading the recipes file failed
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Saving the recipes file failed
    #[error(transparent)]
    Save(#[from] SaveError),
}

/// Errors reading the recipes file
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file exists but could not be read
    #[error("Failed to read recipes file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid recipe document
    #[error("Recipes file is malformed: {0}")]
    Malformed(#[from] quick_xml::DeError),

    /// A recipe in the file has a blank title
    #[error("Recipe #{index} in the recipes file has no title")]
    EmptyTitle { index: usize },
}

impl LoadError {
    /// Message shown to the user when startup cannot continue
    #[must_use]
    pub fn user_message(&self) -> String {
        format!("Could not read recipes from storage. Your recipes file may be corrupted!\n{self}")
    }
}

/// Errors writing the recipes file
#[derive(Debug, Error)]
pub enum SaveError {
    /// The store could not be encoded as XML
    #[error("Failed to encode recipes as XML")]
    Encode(#[source] std::io::Error),

    /// File I/O error
    #[error("Failed to {operation} file: {path}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The temp file was written but could not replace the target
    #[error("Failed to replace {target_path} with {temp_path}")]
    AtomicWriteFailed {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SaveError {
    /// Message shown to the user after a failed save
    #[must_use]
    pub fn user_message(&self) -> String {
        format!("Failed to save recipes to file.\n{self}")
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
