//! External lookup subsystem.
//!
//! # Data Flow
//! ```text
//! orchestrator handler
//!     → city.rs (CEP → city name, postal-code directory)
//!     → weather.rs (city name → Celsius, weather provider)
//! both through
//!     → client.rs (generic GET-and-decode over one shared reqwest client)
//! ```
//!
//! # Design Decisions
//! - One generic fetch primitive; resolvers own the error remapping
//! - No retries and no client-side timeout: an outbound call lives exactly
//!   as long as the inbound request's task, so dropping the inbound
//!   connection aborts the call in flight
//! - Each resolver wraps its network step in one span; the traced wrapper
//!   delegates to an untraced implementation

pub mod city;
pub mod client;
pub mod weather;

pub use city::CityResolver;
pub use client::{LookupClient, LookupError};
pub use weather::WeatherResolver;
