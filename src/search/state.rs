//! Tag selection and search state
//!
//! [`TagSelection`] is the set of checked tags plus the untagged toggle.
//! [`SearchState`] pairs it with the known tags and the current query and
//! runs the full filter pipeline against a store.

use std::collections::BTreeSet;

use super::filter::{compute_all_tags, filter_by_query, filter_by_tags};
use crate::store::RecipeStore;

/// Label shown for the untagged pseudo-tag
pub const UNTAGGED_LABEL: &str = "(untagged)";

/// Which tags are selected, and whether untagged recipes are included
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection {
    tags: BTreeSet<String>,
    include_untagged: bool,
}

impl TagSelection {
    /// Empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection with every known tag and the untagged entry checked
    #[must_use]
    pub fn all(known: &BTreeSet<String>) -> Self {
        Self {
            tags: known.clone(),
            include_untagged: true,
        }
    }

    /// Selection of specific tags
    #[must_use]
    pub fn of<I, S>(tags: I, include_untagged: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tags: crate::recipe::normalize_tags(tags),
            include_untagged,
        }
    }

    pub fn select_all(&mut self, known: &BTreeSet<String>) {
        self.tags.clone_from(known);
        self.include_untagged = true;
    }

    pub fn deselect_all(&mut self) {
        self.tags.clear();
        self.include_untagged = false;
    }

    /// Flip every known tag and the untagged entry
    pub fn invert(&mut self, known: &BTreeSet<String>) {
        self.tags = known.difference(&self.tags).cloned().collect();
        self.include_untagged = !self.include_untagged;
    }

    /// Flip a single tag; returns whether it is now selected
    pub fn toggle(&mut self, tag: &str) -> bool {
        let Some(tag) = crate::recipe::normalize_tag(tag) else {
            return false;
        };
        if self.tags.remove(&tag) {
            false
        } else {
            self.tags.insert(tag);
            true
        }
    }

    /// Flip the untagged entry; returns whether it is now selected
    pub fn toggle_untagged(&mut self) -> bool {
        self.include_untagged = !self.include_untagged;
        self.include_untagged
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    #[must_use]
    pub const fn include_untagged(&self) -> bool {
        self.include_untagged
    }

    /// Whether every known tag and the untagged entry are selected
    #[must_use]
    pub fn covers(&self, known: &BTreeSet<String>) -> bool {
        self.include_untagged && known.is_subset(&self.tags)
    }

    fn retain_known(&mut self, known: &BTreeSet<String>) {
        self.tags.retain(|tag| known.contains(tag));
    }
}

/// Derived filter state for the list/search surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    all_tags: BTreeSet<String>,
    selection: TagSelection,
    query: String,
}

impl SearchState {
    /// Fresh state for `store` with everything selected and no query
    #[must_use]
    pub fn new(store: &RecipeStore) -> Self {
        let all_tags = compute_all_tags(store);
        let selection = TagSelection::all(&all_tags);
        Self {
            all_tags,
            selection,
            query: String::new(),
        }
    }

    /// Recompute known tags after the store changed
    ///
    /// Tags that disappeared are dropped from the selection. New tags are
    /// selected only if the selection covered everything before.
    pub fn refresh(&mut self, store: &RecipeStore) {
        let covered = self.selection.covers(&self.all_tags);
        self.all_tags = compute_all_tags(store);

        if covered {
            self.selection.select_all(&self.all_tags);
        } else {
            self.selection.retain_known(&self.all_tags);
        }
    }

    #[must_use]
    pub const fn all_tags(&self) -> &BTreeSet<String> {
        &self.all_tags
    }

    #[must_use]
    pub const fn selection(&self) -> &TagSelection {
        &self.selection
    }

    /// Replace the selection, keeping only known tags
    pub fn set_selection(&mut self, mut selection: TagSelection) {
        selection.retain_known(&self.all_tags);
        self.selection = selection;
    }

    pub fn select_all(&mut self) {
        self.selection.select_all(&self.all_tags);
    }

    pub fn deselect_all(&mut self) {
        self.selection.deselect_all();
    }

    pub fn invert(&mut self) {
        self.selection.invert(&self.all_tags);
    }

    /// Toggle a known tag; unknown tags are ignored
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        if self.all_tags.contains(tag) {
            self.selection.toggle(tag)
        } else {
            false
        }
    }

    pub fn toggle_untagged(&mut self) -> bool {
        self.selection.toggle_untagged()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Set the text query; stored lowercase
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_lowercase();
    }

    /// Titles passing both filter passes, sorted
    #[must_use]
    pub fn results(&self, store: &RecipeStore) -> Vec<String> {
        let by_tags = filter_by_tags(
            store,
            self.selection.tags(),
            self.selection.include_untagged(),
        );
        filter_by_query(by_tags, store, &self.query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;
    use crate::testing::sample_store;
    use proptest::prelude::*;

    fn set(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn test_new_selects_everything() {
        let store = sample_store();
        let state = SearchState::new(&store);
        assert!(state.selection().include_untagged());
        assert_eq!(state.selection().tags(), state.all_tags());
        assert_eq!(state.results(&store), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_deselect_all_shows_nothing() {
        let store = sample_store();
        let mut state = SearchState::new(&store);
        state.deselect_all();
        assert!(state.results(&store).is_empty());
    }

    #[test]
    fn test_invert() {
        let known = set(&["a", "b", "c"]);
        let mut selection = TagSelection::of(["a"], false);
        selection.invert(&known);
        assert_eq!(selection.tags(), &set(&["b", "c"]));
        assert!(selection.include_untagged());
    }

    #[test]
    fn test_invert_after_select_all_is_empty() {
        let known = set(&["a", "b"]);
        let mut selection = TagSelection::all(&known);
        selection.invert(&known);
        assert_eq!(selection, TagSelection::new());
    }

    #[test]
    fn test_toggle() {
        let mut selection = TagSelection::new();
        assert!(selection.toggle("Easy"));
        assert!(selection.contains("easy"));
        assert!(!selection.toggle("easy"));
        assert!(!selection.contains("easy"));
        assert!(selection.toggle_untagged());
        assert!(!selection.toggle_untagged());
    }

    #[test]
    fn test_toggle_unknown_tag_is_ignored() {
        let store = sample_store();
        let mut state = SearchState::new(&store);
        state.deselect_all();
        assert!(!state.toggle_tag("vegan"));
        assert!(state.selection().tags().is_empty());
    }

    #[test]
    fn test_query_combines_with_tags() {
        let store = sample_store();
        let mut state = SearchState::new(&store);
        state.set_query("DES");
        assert_eq!(state.query(), "des");
        assert_eq!(state.results(&store), vec!["C"]);

        state.deselect_all();
        state.toggle_tag("italian");
        assert!(state.results(&store).is_empty());
    }

    #[test]
    fn test_query_keeps_surrounding_spaces() {
        let mut store = RecipeStore::new();
        store.create(Recipe::new("Lemon Tart", "")).unwrap();
        store.create(Recipe::new("Startup Smoothie", "")).unwrap();
        let mut state = SearchState::new(&store);

        state.set_query(" Tart");
        assert_eq!(state.query(), " tart");
        assert_eq!(state.results(&store), vec!["Lemon Tart"]);

        state.set_query("   ");
        assert!(state.results(&store).is_empty());
    }

    #[test]
    fn test_refresh_keeps_full_selection_full() {
        let mut store = sample_store();
        let mut state = SearchState::new(&store);

        store
            .create(Recipe::new("D", "").with_tags(["vegan"]))
            .unwrap();
        state.refresh(&store);

        assert!(state.selection().contains("vegan"));
        assert!(state.results(&store).contains(&"D".to_string()));
    }

    #[test]
    fn test_refresh_partial_selection() {
        let mut store = sample_store();
        let mut state = SearchState::new(&store);
        state.deselect_all();
        state.toggle_tag("italian");
        state.toggle_tag("dessert");

        store.delete("C");
        store
            .create(Recipe::new("D", "").with_tags(["vegan"]))
            .unwrap();
        state.refresh(&store);

        assert_eq!(state.selection().tags(), &set(&["italian"]));
        assert!(!state.selection().contains("vegan"));
        assert_eq!(state.results(&store), vec!["A"]);
    }

    #[test]
    fn test_set_selection_drops_unknown() {
        let store = sample_store();
        let mut state = SearchState::new(&store);
        state.set_selection(TagSelection::of(["italian", "vegan"], true));
        assert_eq!(state.selection().tags(), &set(&["italian"]));
        assert_eq!(state.results(&store), vec!["A", "B"]);
    }

    proptest! {
        #[test]
        fn invert_twice_is_identity(
            known in proptest::collection::btree_set("[a-z]{1,6}", 0..6),
            picks in proptest::collection::vec(any::<bool>(), 6),
            untagged: bool,
        ) {
            let chosen: Vec<&String> = known
                .iter()
                .zip(picks.iter())
                .filter(|(_, pick)| **pick)
                .map(|(tag, _)| tag)
                .collect();
            let original = TagSelection::of(chosen, untagged);

            let mut selection = original.clone();
            selection.invert(&known);
            selection.invert(&known);
            prop_assert_eq!(selection, original);
        }
    }
}
