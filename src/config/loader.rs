//! Configuration loading from disk and the environment.

use std::env;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse configuration from a TOML file, without env overlay or validation.
pub fn load_file(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Load the effective configuration for a service.
///
/// Reads the file named by `CONFIG_PATH` when set (defaults otherwise),
/// overlays environment variables, then validates. Called once at startup;
/// the result is immutable for the life of the process.
pub fn load() -> Result<AppConfig, ConfigError> {
    let mut config = match env::var("CONFIG_PATH") {
        Ok(path) => load_file(Path::new(&path))?,
        Err(_) => AppConfig::default(),
    };
    config.apply_env();
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}
