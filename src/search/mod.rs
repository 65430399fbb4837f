//! Tag filtering and text search over the recipe store
//!
//! Provides the two filter passes used by the list/search surface:
//! 1. Keep recipes carrying any selected tag (or no tags, if untagged recipes are included)
//! 2. Keep recipes whose title or description contains the query

pub mod filter;
pub mod state;

pub use filter::{TitleFilterExt, compute_all_tags, filter_by_query, filter_by_tags};
pub use state::{SearchState, TagSelection, UNTAGGED_LABEL};
