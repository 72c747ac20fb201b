//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses and URLs before the services start
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - A missing weather API key is not a config error; the weather resolver
//!   reports it per request with a 400

use std::fmt;
use std::net::SocketAddr;

use url::Url;

use crate::config::schema::AppConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBindAddress(String),
    InvalidUrl { field: &'static str, value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address is not a socket address: {addr}")
            }
            ValidationError::InvalidUrl { field, value } => {
                write!(f, "{field} is not a valid URL: {value}")
            }
        }
    }
}

/// Validate the loaded configuration, collecting every error found.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let urls = [
        ("forward.orchestrator_url", &config.forward.orchestrator_url),
        ("upstream.directory_base_url", &config.upstream.directory_base_url),
        ("upstream.weather_base_url", &config.upstream.weather_base_url),
        ("telemetry.endpoint", &config.telemetry.endpoint),
    ];
    for (field, value) in urls {
        if Url::parse(value).is_err() {
            errors.push(ValidationError::InvalidUrl {
                field,
                value: value.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
