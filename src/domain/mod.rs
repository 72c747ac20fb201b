//! Domain types and pure logic.
//!
//! # Data Flow
//! ```text
//! inbound body / query string
//!     → model.rs (request & upstream response shapes)
//!     → cep.rs (8-digit validation, Cep newtype)
//!     → temperature.rs (unit conversion, response payload)
//! ```
//!
//! # Design Decisions
//! - Validation and conversion are pure functions; no I/O lives here
//! - Upstream response shapes mirror the external contracts verbatim
//! - A TemperatureReport is only built once both lookups have succeeded

pub mod cep;
pub mod model;
pub mod temperature;

pub use cep::{is_valid_cep, Cep};
pub use model::{DirectoryResponse, ErrorEnvelope, WeatherResponse, ZipCodeRequest};
pub use temperature::TemperatureReport;
