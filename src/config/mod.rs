//! Configuration module for cookbook
//!
//! Manages application configuration such as the recipes file location.
//! Configuration is stored in the user's config directory as TOML and can be
//! overridden with `COOKBOOK_*` environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Directory name used under the platform config and data directories
pub const APP_DIR: &str = "cookbook";

/// Default name of the recipes file
pub const RECIPES_FILE_NAME: &str = "recipes.xml";

/// Keys accepted by `config get` / `config set`
pub const KEYS: &[&str] = &["recipes_file", "quiet"];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CookbookConfig {
    /// Location of the recipes file; the platform data directory if unset
    #[serde(default)]
    pub recipes_file: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,
}

impl CookbookConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join(APP_DIR).join("config.toml"))
    }

    /// Default recipes file in the platform data directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system data directory cannot be determined.
    pub fn default_recipes_path() -> Result<PathBuf, ConfigError> {
        let data_dir = dirs::data_local_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine data directory".to_string()))?;

        Ok(data_dir.join(APP_DIR).join(RECIPES_FILE_NAME))
    }

    /// Load configuration from the user config file, creating a default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            tracing::info!("Created default config at {}", config_path.display());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file plus environment overrides
    ///
    /// A missing file is treated as empty.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix("COOKBOOK"))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Resolve the recipes file: explicit override, then config, then default
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if no override is given and the data directory is unknown.
    pub fn recipes_path(&self, cli_override: Option<&Path>) -> Result<PathBuf, ConfigError> {
        match cli_override.or(self.recipes_file.as_deref()) {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_recipes_path(),
        }
    }

    /// Read a setting by key as display text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for unknown keys.
    pub fn get_value(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "recipes_file" => Ok(self
                .recipes_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            "quiet" => Ok(self.quiet.to_string()),
            _ => Err(ConfigError::NotFound(key.to_string())),
        }
    }

    /// Change a setting by key
    ///
    /// An empty value clears `recipes_file`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` for unknown keys and
    /// `ConfigError::Message` for values that don't parse.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "recipes_file" => {
                let value = value.trim();
                self.recipes_file = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "quiet" => {
                self.quiet = value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Message(format!("Invalid value for quiet: '{value}' (expected true or false)")))?;
            }
            _ => return Err(ConfigError::NotFound(key.to_string())),
        }
        Ok(())
    }
}
