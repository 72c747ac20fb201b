//! CEP-to-Temperature Pipeline
//!
//! Two cooperating HTTP services that resolve a Brazilian postal code (CEP)
//! to a city name and its current temperature in three scales, carrying a
//! distributed trace across the service boundary.
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌─────────────────────┐        ┌──────────────────────────┐
//!   POST /        │     SERVICE A       │ GET /? │       SERVICE B          │
//!   {"cep":..} ───┼▶ ingress handler ───┼────────┼▶ orchestrator handler    │
//!                 │   - method check    │ cep=.. │   - validate cep         │
//!                 │   - decode body     │ +trace │   - resolve city ────────┼──▶ postal directory
//!                 │   - validate cep    │headers │   - resolve weather ─────┼──▶ weather provider
//!   response  ◀───┼── relay status/body │        │   - convert C → F, K     │
//!                 └─────────────────────┘        └──────────────────────────┘
//!
//!   Cross-cutting: config (file + env, read once), structured logging,
//!   OTLP span export with W3C trace-context propagation on the A → B hop.
//! ```
//!
//! The library holds everything both binaries share; `src/bin/service_a.rs`
//! and `src/bin/service_b.rs` are thin entrypoints that wire config,
//! observability, and the router together.

// Core subsystems
pub mod config;
pub mod domain;
pub mod http;
pub mod lookup;

// Cross-cutting concerns
pub mod observability;

pub use config::AppConfig;
pub use domain::temperature::TemperatureReport;
pub use http::error::PipelineError;
