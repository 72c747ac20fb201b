//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML, path from CONFIG_PATH)
//!     → loader.rs (parse & deserialize)
//!     → schema.rs apply_env (PORT, SERVICE_B_URL, API_KEY, ... overlay)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; there is no reload
//! - All fields have defaults so a bare environment still boots
//! - Environment variables beat file values, file values beat defaults
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, ConfigError};
pub use schema::AppConfig;
