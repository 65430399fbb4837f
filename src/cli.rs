//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for cookbook using the `clap` crate.
//!
//! # Commands
//!
//! - **list**: List recipes with their tags (default)
//! - **show**: Display a single recipe
//! - **add** / **edit** / **delete**: Manage recipes
//! - **tags**: List tags with usage counts
//! - **search**: Filter recipes by tags and text
//! - **config**: Read or change configuration
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Global `--file` to work on a specific recipes file
//! - Repeatable `-v` for log verbosity, `--log-format` for the log layout
//! - Tag values accept the editor's `;`-separated form (`-t "italian; easy"`)

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::logging::{LogConfig, LogFormat};
use crate::recipe::RecipeDraft;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "cookbook")]
#[command(about = "A recipe manager with tag filtering and search", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Recipes file to use (overrides config)
    #[arg(long = "file", value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format (pretty for human, json for machine parsing)
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Include the module path in log lines
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,
}

/// CLI log format choices
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Recipe fields shared by `add` and `edit`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFields {
    /// Recipe description
    #[arg(short = 'd', long = "description")]
    pub description: Option<String>,

    /// Ingredient line (repeat for each ingredient, in order)
    #[arg(short = 'i', long = "ingredient", value_name = "INGREDIENT")]
    pub ingredients: Vec<String>,

    /// Procedure step (repeat for each step, in order)
    #[arg(short = 's', long = "step", value_name = "STEP")]
    pub steps: Vec<String>,

    /// Tags, separated by ';' (can specify multiple: -t italian -t "easy; quick")
    #[arg(short = 't', long = "tag", value_name = "TAGS")]
    pub tags: Vec<String>,
}

impl RecipeFields {
    /// Tag arguments joined into editor tag text
    #[must_use]
    pub fn tags_text(&self) -> String {
        self.tags.join(";")
    }

    /// Draft for a new recipe titled `title`
    #[must_use]
    pub fn new_draft(&self, title: &str) -> RecipeDraft {
        RecipeDraft {
            editing: None,
            title: title.to_string(),
            description: self.description.clone().unwrap_or_default(),
            ingredients: self.ingredients.clone(),
            procedure: self.steps.clone(),
            tags_text: self.tags_text(),
        }
    }

    /// Overwrite the draft fields that were given on the command line
    pub fn apply_to(&self, draft: &mut RecipeDraft) {
        if let Some(description) = &self.description {
            draft.description.clone_from(description);
        }
        if !self.ingredients.is_empty() {
            draft.ingredients.clone_from(&self.ingredients);
        }
        if !self.steps.is_empty() {
            draft.procedure.clone_from(&self.steps);
        }
        if !self.tags.is_empty() {
            draft.tags_text = self.tags_text();
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List all recipes (default)
    #[command(visible_alias = "ls")]
    List,

    /// Show a recipe
    #[command(visible_alias = "view")]
    Show {
        /// Title of the recipe
        title: String,
    },

    /// Add a new recipe
    Add {
        /// Title of the new recipe
        title: String,

        #[command(flatten)]
        fields: RecipeFields,
    },

    /// Edit an existing recipe; only the given fields change
    Edit {
        /// Title of the recipe to edit
        title: String,

        /// New title
        #[arg(long = "title", value_name = "NEW_TITLE")]
        new_title: Option<String>,

        #[command(flatten)]
        fields: RecipeFields,

        /// Remove all tags
        #[arg(long = "clear-tags", conflicts_with = "tags")]
        clear_tags: bool,
    },

    /// Delete a recipe
    #[command(visible_alias = "rm")]
    Delete {
        /// Title of the recipe to delete
        title: String,

        /// Skip the confirmation prompt
        #[arg(short = 'f', long = "force")]
        force: bool,
    },

    /// List all tags with the number of recipes using them
    Tags,

    /// Search recipes by tag and text
    #[command(visible_alias = "s")]
    Search {
        /// Text to find in titles and descriptions
        #[arg(value_name = "QUERY")]
        query: Option<String>,

        /// Only show recipes with these tags (default: all tags)
        #[arg(short = 't', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Include recipes without tags
        #[arg(long = "untagged")]
        untagged: bool,

        /// Invert the tag selection
        #[arg(long = "invert")]
        invert: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., quiet=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., recipes_file)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Logging configuration from `-v`, `--log-format` and `--log-target`
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        let format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        LogConfig::from_verbosity(self.verbose)
            .with_format(format)
            .with_target(self.log_target)
    }

    /// Get the command, defaulting to List if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List)
    }
}

/// Split a `KEY=VALUE` setting
///
/// Returns `None` if there is no `=` or the key is empty.
#[must_use]
pub fn parse_setting(setting: &str) -> Option<(&str, &str)> {
    let (key, value) = setting.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        None
    } else {
        Some((key, value.trim()))
    }
}
