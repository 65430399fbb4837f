//! Tag and text filter passes over a recipe store
//!
//! Filtering runs in two passes. The tag pass keeps recipes carrying a
//! selected tag (or no tags at all, when untagged recipes are included).
//! The query pass keeps titles whose title or description contains the
//! query. A recipe must pass both to be shown.
//!
//! # Iterator Adapters
//!
//! [`TitleFilterExt`] adds the query pass to any iterator of titles:
//!
//! ```
//! use cookbook::recipe::Recipe;
//! use cookbook::search::filter::TitleFilterExt;
//! use cookbook::store::RecipeStore;
//!
//! let store: RecipeStore = [
//!     Recipe::new("Pancakes", "Sweet breakfast"),
//!     Recipe::new("Omelette", "Savory breakfast"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let hits = store.titles().map(String::from).matching_query(&store, "sweet");
//! assert_eq!(hits, vec!["Pancakes".to_string()]);
//! ```

use std::collections::BTreeSet;

use crate::recipe::Recipe;
use crate::store::RecipeStore;

/// Union of every tag used in the store
#[must_use]
pub fn compute_all_tags(store: &RecipeStore) -> BTreeSet<String> {
    store
        .all()
        .flat_map(|recipe| recipe.tags().iter().cloned())
        .collect()
}

/// Whether `recipe` passes the tag pass
#[must_use]
pub fn passes_tags(recipe: &Recipe, selected: &BTreeSet<String>, include_untagged: bool) -> bool {
    if recipe.has_tags() {
        recipe.has_any_tag(selected)
    } else {
        include_untagged
    }
}

/// Titles of recipes passing the tag pass
///
/// # Arguments
/// * `store` - Recipes to filter
/// * `selected` - Tags to keep; a recipe passes if it has any of them
/// * `include_untagged` - Whether recipes without tags pass
#[must_use]
pub fn filter_by_tags(
    store: &RecipeStore,
    selected: &BTreeSet<String>,
    include_untagged: bool,
) -> BTreeSet<String> {
    store
        .all()
        .filter(|recipe| passes_tags(recipe, selected, include_untagged))
        .map(|recipe| recipe.title.clone())
        .collect()
}

/// Whether `title` (or its recipe's description) contains `query`
///
/// `query` must already be lowercase. An empty query matches everything.
/// Titles with no recipe in the store can only match on the title.
#[must_use]
pub fn matches_query(title: &str, store: &RecipeStore, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    title.to_lowercase().contains(query)
        || store
            .get(title)
            .is_some_and(|recipe| recipe.description.to_lowercase().contains(query))
}

/// Titles passing the query pass, in input order
///
/// # Arguments
/// * `titles` - Candidate titles, usually the output of the tag pass
/// * `store` - Source of descriptions
/// * `query` - Lowercase substring; empty passes everything through
#[must_use]
pub fn filter_by_query(
    titles: impl IntoIterator<Item = String>,
    store: &RecipeStore,
    query: &str,
) -> Vec<String> {
    titles
        .into_iter()
        .filter(|title| matches_query(title, store, query))
        .collect()
}

/// Extension trait adding the query pass to title iterators
pub trait TitleFilterExt: IntoIterator<Item = String> + Sized {
    /// Keep titles matching `query` (already lowercase)
    fn matching_query(self, store: &RecipeStore, query: &str) -> Vec<String> {
        filter_by_query(self, store, query)
    }
}

impl<I> TitleFilterExt for I where I: IntoIterator<Item = String> {}
