//! Testing utilities for cookbook
//!
//! This module provides fixtures shared by unit tests: a small sample store
//! and a `TempRecipesFile` guard that keeps a recipes file in its own
//! temporary directory.
//!
//! Only available when compiled with `cfg(test)`.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::recipe::Recipe;
use crate::store::RecipeStore;

/// Store with three recipes:
///
/// - `A`: tags `italian`, `easy`
/// - `B`: no tags
/// - `C`: tag `dessert`, description mentions "dessert"
#[must_use]
pub fn sample_store() -> RecipeStore {
    [
        Recipe::new("A", "Weeknight pasta")
            .with_ingredients(["spaghetti", "garlic"])
            .with_procedure(["Boil water", "Cook pasta"])
            .with_tags(["Italian", "easy"]),
        Recipe::new("B", "Crusty loaf")
            .with_ingredients(["flour", "water", "salt"])
            .with_procedure(["Knead", "Bake"]),
        Recipe::new("C", "A chilled dessert")
            .with_ingredients(["cream"])
            .with_procedure(["Whip", "Chill"])
            .with_tags(["dessert"]),
    ]
    .into_iter()
    .collect()
}

/// RAII guard for a recipes file path in a fresh temporary directory
///
/// The file itself is not created; the directory is removed on drop.
pub struct TempRecipesFile {
    _dir: TempDir,
    path: PathBuf,
}

impl TempRecipesFile {
    /// # Panics
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("recipes.xml");
        Self { _dir: dir, path }
    }

    /// Guard whose file already holds `store`
    ///
    /// # Panics
    /// Panics if the store cannot be saved.
    #[must_use]
    pub fn with_store(store: &RecipeStore) -> Self {
        let file = Self::new();
        store.save(file.path()).expect("Failed to save test store");
        file
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_store_shape() {
        let store = sample_store();
        assert_eq!(store.len(), 3);
        assert!(!store.get("B").unwrap().has_tags());
        assert!(store.get("A").unwrap().tags().contains("italian"));
    }

    #[test]
    fn test_temp_recipes_file_cleanup() {
        let path;
        {
            let file = TempRecipesFile::with_store(&sample_store());
            path = file.path().to_path_buf();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }
}
