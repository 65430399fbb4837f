//! Recipe entity and tag normalization
//!
//! A [`Recipe`] is a plain value: title, description, ordered ingredients,
//! ordered procedure steps and a tag set. Tags are always stored lowercase
//! and trimmed, so the set collapses duplicates that only differ in case.
//!
//! Title uniqueness is not a property of the entity; it is enforced by
//! [`crate::store::RecipeStore`].
//!
//! # Examples
//!
//! ```
//! use cookbook::recipe::Recipe;
//!
//! let recipe = Recipe::new("Carbonara", "Roman pasta")
//!     .with_ingredients(["spaghetti", "guanciale", "pecorino"])
//!     .with_tags(["Italian", "easy", "ITALIAN"]);
//!
//! assert_eq!(recipe.tags().len(), 2);
//! assert!(recipe.tags().contains("italian"));
//! ```

pub mod draft;

use std::collections::BTreeSet;

pub use draft::RecipeDraft;

/// Separator used by the editor's tag text field
pub const TAG_SEPARATOR: char = ';';

/// A single recipe
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Recipe {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub procedure: Vec<String>,
    tags: BTreeSet<String>,
}

impl Recipe {
    /// Create a recipe with no ingredients, steps or tags
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_procedure<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.procedure = steps.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.set_tags(tags);
        self
    }

    /// Replace the tag set, normalizing every tag
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = normalize_tags(tags);
    }

    /// Add a single tag
    ///
    /// Returns `false` if the tag normalized to nothing or was already present.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        normalize_tag(tag).is_some_and(|tag| self.tags.insert(tag))
    }

    #[must_use]
    pub const fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    #[must_use]
    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }

    /// Whether this recipe carries at least one of `selected`
    #[must_use]
    pub fn has_any_tag(&self, selected: &BTreeSet<String>) -> bool {
        // Iterate the smaller side; both are sorted sets.
        if self.tags.len() <= selected.len() {
            self.tags.iter().any(|tag| selected.contains(tag))
        } else {
            selected.iter().any(|tag| self.tags.contains(tag))
        }
    }

    /// Whether `title` is blank
    #[must_use]
    pub fn has_blank_title(&self) -> bool {
        self.title.trim().is_empty()
    }
}

/// Normalize a tag: trimmed and lowercased
///
/// Returns `None` when nothing is left after trimming.
#[must_use]
pub fn normalize_tag(tag: &str) -> Option<String> {
    let tag = tag.trim();
    if tag.is_empty() {
        None
    } else {
        Some(tag.to_lowercase())
    }
}

/// Normalize a collection of tags into a set
///
/// Applying this to its own output yields the same set.
#[must_use]
pub fn normalize_tags<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|tag| normalize_tag(tag.as_ref()))
        .collect()
}

/// Parse the editor's `;`-separated tag text
///
/// # Examples
///
/// ```
/// use cookbook::recipe::parse_tag_list;
///
/// let tags = parse_tag_list("Italian; easy ;; ");
/// assert_eq!(tags.into_iter().collect::<Vec<_>>(), vec!["easy", "italian"]);
/// ```
#[must_use]
pub fn parse_tag_list(text: &str) -> BTreeSet<String> {
    normalize_tags(text.split(TAG_SEPARATOR))
}

/// Join tags back into editor text
#[must_use]
pub fn format_tag_list(tags: &BTreeSet<String>) -> String {
    tags.iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(&format!("{TAG_SEPARATOR} "))
}
