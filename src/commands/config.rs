//! Config command - read and change settings

use crate::{
    CookbookError,
    cli::{ConfigCommands, parse_setting},
    config::{CookbookConfig, KEYS},
};

type Result<T> = std::result::Result<T, CookbookError>;

/// Execute the config command
///
/// # Errors
/// Returns `InvalidInput` for malformed settings or unknown keys and a
/// configuration error if the config file cannot be written
pub fn execute(mut config: CookbookConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = parse_setting(setting).ok_or_else(|| {
                CookbookError::InvalidInput("Invalid format. Use: cookbook config set key=value".into())
            })?;

            config
                .set_value(key, value)
                .map_err(|e| unknown_key_or(key, e))?;
            config.save()?;

            if !quiet {
                println!("Set {key} = {}", config.get_value(key).unwrap_or_default());
            }
        }
        ConfigCommands::Get { key } => {
            let value = config.get_value(key).map_err(|e| unknown_key_or(key, e))?;
            println!("{value}");
        }
    }
    Ok(())
}

fn unknown_key_or(key: &str, error: ::config::ConfigError) -> CookbookError {
    match error {
        ::config::ConfigError::NotFound(_) => CookbookError::InvalidInput(format!(
            "Unknown configuration key: '{key}'. Available keys: {}",
            KEYS.join(", ")
        )),
        other => CookbookError::InvalidInput(other.to_string()),
    }
}
