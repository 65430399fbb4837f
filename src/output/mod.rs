//! Output formatting for CLI display
//!
//! This module provides utilities for formatting recipes and tags in the
//! CLI. Text helpers return plain strings; colour is only applied by the
//! `colorize_*` helpers so tests can compare text directly.

use crate::recipe::Recipe;
use colored::Colorize;

/// Prefix for each ingredient line in the recipe view
pub const INGREDIENT_PREFIX: &str = "\u{2022} ";

/// Shown when the requested recipe no longer exists
pub const PLACEHOLDER: &str = "(no recipe selected)";

/// Format a recipe title with its tags for list display
#[must_use]
pub fn recipe_with_tags(recipe: &Recipe, quiet: bool) -> String {
    if quiet {
        recipe.title.clone()
    } else if recipe.has_tags() {
        format!("  {} [{}]", recipe.title, join_tags(recipe))
    } else {
        format!("  {} (no tags)", recipe.title)
    }
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {tag} (used by {count} recipe(s))")
    }
}

/// Render a recipe for the viewer
///
/// Layout: title, description, tag line (only if tagged), a blank line,
/// the `Ingredients` section with bullets and the `Directions` section
/// with numbered steps. An absent recipe renders as a placeholder.
#[must_use]
pub fn render_recipe(recipe: Option<&Recipe>) -> String {
    let Some(recipe) = recipe else {
        return format!("{PLACEHOLDER}\n");
    };

    let mut out = String::new();
    push_line(&mut out, &recipe.title);
    push_line(&mut out, &recipe.description);
    if recipe.has_tags() {
        push_line(&mut out, &format!("Tags: {}", join_tags(recipe)));
    }
    out.push('\n');

    push_line(&mut out, "Ingredients");
    for ingredient in &recipe.ingredients {
        push_line(&mut out, &format!("{INGREDIENT_PREFIX}{ingredient}"));
    }

    push_line(&mut out, "Directions");
    for (i, step) in recipe.procedure.iter().enumerate() {
        push_line(&mut out, &format!("{}. {step}", i + 1));
    }
    out
}

/// Colour the headings of a rendered recipe
///
/// The first line (title) is bold; section headings are underlined and the
/// tag line is dimmed.
#[must_use]
pub fn colorize_recipe(rendered: &str) -> String {
    let mut out = String::with_capacity(rendered.len());
    for (i, line) in rendered.lines().enumerate() {
        let styled = if i == 0 {
            line.bold().to_string()
        } else if line == "Ingredients" || line == "Directions" {
            line.underline().to_string()
        } else if line.starts_with("Tags: ") {
            line.dimmed().to_string()
        } else {
            line.to_string()
        };
        out.push_str(&styled);
        out.push('\n');
    }
    out
}

/// Success message in green
#[must_use]
pub fn success(message: &str) -> String {
    format!("{} {message}", "✓".green())
}

fn join_tags(recipe: &Recipe) -> String {
    recipe
        .tags()
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
