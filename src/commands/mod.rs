//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against the application context.

pub mod add;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod search;
pub mod show;
pub mod tags;

// Re-export execute functions for convenience
pub use add::execute as add;
pub use config::execute as config;
pub use delete::execute as delete;
pub use edit::execute as edit;
pub use list::execute as list;
pub use search::execute as search;
pub use show::execute as show;
pub use tags::execute as tags;
