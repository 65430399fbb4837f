//! Recipe store
//!
//! [`RecipeStore`] owns every [`Recipe`] in the session, keyed by title.
//! It enforces title uniqueness (exact, case-sensitive match) and handles
//! loading from and saving to the XML recipes file.
//!
//! Saving writes a temporary sibling file, syncs it and renames it over the
//! destination, so an interrupted save never truncates the existing file.
//!
//! # Examples
//!
//! ```
//! use cookbook::recipe::Recipe;
//! use cookbook::store::{RecipeStore, StoreError};
//!
//! let mut store = RecipeStore::new();
//! store.create(Recipe::new("Soup", "Hot")).unwrap();
//!
//! let duplicate = store.create(Recipe::new("Soup", "Cold"));
//! assert!(matches!(duplicate, Err(StoreError::TitleConflict(_))));
//! assert_eq!(store.get("Soup").unwrap().description, "Hot");
//! ```

pub mod error;
pub mod xml;

use std::collections::{BTreeMap, btree_map};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::recipe::Recipe;
pub use error::{LoadError, SaveError, StoreError};

/// In-memory recipe collection keyed by title
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeStore {
    recipes: BTreeMap<String, Recipe>,
}

impl RecipeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a store from `path`
    ///
    /// A missing file yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the file exists but cannot be read or parsed.
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        let mut store = Self::new();
        store.load(path)?;
        Ok(store)
    }

    /// Insert a new recipe
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyTitle` for a blank title and
    /// `StoreError::TitleConflict` if the title is already used.
    pub fn create(&mut self, recipe: Recipe) -> Result<(), StoreError> {
        if recipe.has_blank_title() {
            return Err(StoreError::EmptyTitle);
        }

        match self.recipes.entry(recipe.title.clone()) {
            btree_map::Entry::Occupied(entry) => Err(StoreError::TitleConflict(entry.key().clone())),
            btree_map::Entry::Vacant(entry) => {
                tracing::debug!(title = %recipe.title, "created recipe");
                entry.insert(recipe);
                Ok(())
            }
        }
    }

    /// Replace the recipe stored under `old_title` with `recipe`
    ///
    /// The new recipe may carry a different title. All checks happen before
    /// the store is touched, so on error the store is unchanged. If
    /// `old_title` is absent the recipe is inserted as new.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyTitle` for a blank title and
    /// `StoreError::TitleConflict` if the new title belongs to a different recipe.
    pub fn update(&mut self, old_title: &str, recipe: Recipe) -> Result<(), StoreError> {
        if recipe.has_blank_title() {
            return Err(StoreError::EmptyTitle);
        }

        if recipe.title == old_title {
            tracing::debug!(title = %old_title, "updated recipe in place");
            self.recipes.insert(recipe.title.clone(), recipe);
            return Ok(());
        }

        if self.recipes.contains_key(&recipe.title) {
            return Err(StoreError::TitleConflict(recipe.title));
        }

        if self.recipes.remove(old_title).is_none() {
            tracing::debug!(title = %old_title, "edited recipe no longer present, inserting");
        }
        tracing::debug!(from = %old_title, to = %recipe.title, "renamed recipe");
        self.recipes.insert(recipe.title.clone(), recipe);
        Ok(())
    }

    /// Remove a recipe; absent titles are ignored
    ///
    /// Returns the removed recipe, if any.
    pub fn delete(&mut self, title: &str) -> Option<Recipe> {
        let removed = self.recipes.remove(title);
        if removed.is_some() {
            tracing::debug!(title = %title, "deleted recipe");
        }
        removed
    }

    #[must_use]
    pub fn get(&self, title: &str) -> Option<&Recipe> {
        self.recipes.get(title)
    }

    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.recipes.contains_key(title)
    }

    /// All recipes, ordered by title
    pub fn all(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.values()
    }

    /// All titles, in sorted order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.recipes.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Number of recipes using each tag
    #[must_use]
    pub fn tag_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for tag in self.all().flat_map(|recipe| recipe.tags()) {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Replace the whole collection with the contents of `path`
    ///
    /// A missing file leaves the store empty. On error the store is empty.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the file exists but cannot be read or parsed.
    pub fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        self.recipes.clear();

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No recipes file at {}, starting empty", path.display());
                return Ok(());
            }
            Err(e) => {
                return Err(LoadError::Io {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        self.load_str(&text)?;
        tracing::info!("Loaded {} recipes from {}", self.len(), path.display());
        Ok(())
    }

    /// Replace the whole collection with a parsed recipes document
    ///
    /// When the document repeats a title, the later recipe wins.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the text is not a valid recipes document.
    pub fn load_str(&mut self, text: &str) -> Result<(), LoadError> {
        self.recipes.clear();

        for recipe in xml::parse_document(text)? {
            if let Some(previous) = self.recipes.insert(recipe.title.clone(), recipe) {
                tracing::warn!(title = %previous.title, "duplicate recipe title in file, keeping the later one");
            }
        }
        Ok(())
    }

    /// Write the whole collection to `path`
    ///
    /// Uses atomic write (temp file + rename). Parent directories are
    /// created as needed.
    ///
    /// # Errors
    ///
    /// Returns `SaveError` if any step of the write fails. The store itself
    /// is never modified.
    pub fn save(&self, path: &Path) -> Result<(), SaveError> {
        let bytes = xml::write_document(self.all()).map_err(SaveError::Encode)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| SaveError::Io {
                operation: "create directory",
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let temp_path = path.with_extension("xml.tmp");

        if let Err(e) = write_temp_file(&temp_path, &bytes) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SaveError::AtomicWriteFailed {
                temp_path: temp_path.clone(),
                target_path: path.to_path_buf(),
                source: e,
            }
        })?;

        tracing::info!("Saved {} recipes to {}", self.len(), path.display());
        Ok(())
    }
}

/// Write `bytes` to `temp_path` and flush them to disk
fn write_temp_file(temp_path: &Path, bytes: &[u8]) -> Result<(), SaveError> {
    let mut file = File::create(temp_path).map_err(|e| SaveError::Io {
        operation: "create",
        path: temp_path.to_path_buf(),
        source: e,
    })?;

    file.write_all(bytes).map_err(|e| SaveError::Io {
        operation: "write",
        path: temp_path.to_path_buf(),
        source: e,
    })?;

    file.sync_all().map_err(|e| SaveError::Io {
        operation: "sync",
        path: temp_path.to_path_buf(),
        source: e,
    })
}

impl FromIterator<Recipe> for RecipeStore {
    /// Collect recipes into a store; later duplicates replace earlier ones
    fn from_iter<I: IntoIterator<Item = Recipe>>(iter: I) -> Self {
        Self {
            recipes: iter
                .into_iter()
                .map(|recipe| (recipe.title.clone(), recipe))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_store;
    use proptest::prelude::*;
    use proptest::test_runner::Config;
    use tempfile::TempDir;

    const TEXT: &str = "[A-Za-z0-9&<>'\"][A-Za-z0-9 &<>'\"]{0,12}";

    fn recipe_strategy() -> impl Strategy<Value = Recipe> {
        (
            TEXT,
            proptest::option::of(TEXT),
            proptest::collection::vec(TEXT, 0..4),
            proptest::collection::vec(TEXT, 0..4),
            proptest::collection::vec("[A-Za-z ]{0,8}", 0..4),
        )
            .prop_map(|(title, description, ingredients, procedure, tags)| {
                Recipe::new(title, description.unwrap_or_default())
                    .with_ingredients(ingredients)
                    .with_procedure(procedure)
                    .with_tags(tags)
            })
    }

    #[test]
    fn test_create_and_get_lowercases_tags() {
        let mut store = RecipeStore::new();
        let recipe = Recipe::new("Pasta", "Quick").with_tags(["Italian", "EASY"]);
        store.create(recipe.clone()).unwrap();

        let stored = store.get("Pasta").unwrap();
        assert_eq!(stored, &recipe);
        assert!(stored.tags().iter().all(|t| t.chars().all(|c| !c.is_uppercase())));
    }

    #[test]
    fn test_create_conflict_leaves_existing() {
        let mut store = RecipeStore::new();
        store.create(Recipe::new("Soup", "Hot")).unwrap();

        let result = store.create(Recipe::new("Soup", "Cold"));
        assert!(matches!(result, Err(StoreError::TitleConflict(t)) if t == "Soup"));
        assert_eq!(store.get("Soup").unwrap().description, "Hot");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_blank_title() {
        let mut store = RecipeStore::new();
        assert!(matches!(
            store.create(Recipe::new("  ", "")),
            Err(StoreError::EmptyTitle)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_titles_are_case_sensitive() {
        let mut store = RecipeStore::new();
        store.create(Recipe::new("Soup", "")).unwrap();
        store.create(Recipe::new("soup", "")).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_update_same_title_replaces() {
        let mut store = RecipeStore::new();
        store.create(Recipe::new("Soup", "Hot")).unwrap();
        store
            .update("Soup", Recipe::new("Soup", "Very hot").with_tags(["winter"]))
            .unwrap();

        assert_eq!(store.len(), 1);
        let soup = store.get("Soup").unwrap();
        assert_eq!(soup.description, "Very hot");
        assert!(soup.tags().contains("winter"));
    }

    #[test]
    fn test_update_rename() {
        let mut store = RecipeStore::new();
        store.create(Recipe::new("Soup", "Hot")).unwrap();
        store.update("Soup", Recipe::new("Tomato Soup", "Hot")).unwrap();

        assert!(store.get("Soup").is_none());
        assert!(store.get("Tomato Soup").is_some());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_conflict_leaves_store_unchanged() {
        let mut store = sample_store();
        let before = store.clone();

        let result = store.update("A", Recipe::new("C", "clash"));
        assert!(matches!(result, Err(StoreError::TitleConflict(t)) if t == "C"));
        assert_eq!(store, before);
    }

    #[test]
    fn test_update_blank_title_leaves_store_unchanged() {
        let mut store = sample_store();
        let before = store.clone();

        assert!(matches!(
            store.update("A", Recipe::new("", "")),
            Err(StoreError::EmptyTitle)
        ));
        assert_eq!(store, before);
    }

    #[test]
    fn test_update_missing_original_inserts() {
        let mut store = RecipeStore::new();
        store.update("Gone", Recipe::new("Back", "")).unwrap();
        assert!(store.contains("Back"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete() {
        let mut store = sample_store();
        let removed = store.delete("B").unwrap();
        assert_eq!(removed.title, "B");
        assert!(!store.contains("B"));
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = sample_store();
        let before = store.clone();
        assert!(store.delete("Nope").is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn test_all_is_sorted_by_title() {
        let store: RecipeStore = ["b", "C", "a"]
            .into_iter()
            .map(|t| Recipe::new(t, ""))
            .collect();
        let titles: Vec<_> = store.titles().collect();
        assert_eq!(titles, vec!["C", "a", "b"]);
    }

    #[test]
    fn test_tag_counts() {
        let mut store = sample_store();
        store
            .create(Recipe::new("D", "").with_tags(["easy"]))
            .unwrap();

        let counts = store.tag_counts();
        assert_eq!(counts.get("easy"), Some(&2));
        assert_eq!(counts.get("italian"), Some(&1));
        assert_eq!(counts.get("dessert"), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.xml");

        let store = sample_store();
        store.save(&path).unwrap();
        assert!(!path.with_extension("xml.tmp").exists());

        let loaded = RecipeStore::open(&path).unwrap();
        assert_eq!(loaded, store);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("recipes.xml");

        sample_store().save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let mut store = sample_store();
        store.load(&dir.path().join("absent.xml")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.xml");
        fs::write(&path, "<Recipes><Recipe><title>Half").unwrap();

        let mut store = sample_store();
        let result = store.load(&path);
        assert!(matches!(result, Err(LoadError::Malformed(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = RecipeStore::open(dir.path());
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_load_duplicate_titles_keeps_last() {
        let mut store = RecipeStore::new();
        store
            .load_str(
                "<Recipes>\
                 <Recipe><title>Soup</title><description>first</description></Recipe>\
                 <Recipe><title>Soup</title><description>second</description></Recipe>\
                 </Recipes>",
            )
            .unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Soup").unwrap().description, "second");
    }

    #[test]
    fn test_save_into_file_parent_fails_and_keeps_store() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "").unwrap();

        let store = sample_store();
        let result = store.save(&blocker.join("recipes.xml"));
        assert!(matches!(result, Err(SaveError::Io { .. })));
        assert_eq!(store, sample_store());
    }

    #[test]
    fn test_failed_save_removes_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.xml");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("keep"), "").unwrap();

        let result = sample_store().save(&path);
        assert!(matches!(result, Err(SaveError::AtomicWriteFailed { .. })));
        assert!(!path.with_extension("xml.tmp").exists());
    }

    proptest! {
        #![proptest_config(Config::with_cases(64))]
        #[test]
        fn save_then_load_preserves_any_store(
            recipes in proptest::collection::vec(recipe_strategy(), 0..6)
        ) {
            let store: RecipeStore = recipes.into_iter().collect();
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("recipes.xml");

            store.save(&path).unwrap();
            let loaded = RecipeStore::open(&path).unwrap();
            prop_assert_eq!(loaded, store);
        }
    }
}
