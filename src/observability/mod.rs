//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers and resolvers produce:
//!     → tracing spans/events (structured, request-scoped)
//!         → logging.rs (fmt layer, env-filtered, stdout)
//!         → telemetry.rs (OTLP span export, batch)
//!
//! across the ingress → orchestrator hop:
//!     → propagation.rs (W3C traceparent + baggage in request headers)
//! ```
//!
//! # Design Decisions
//! - One tracer provider per process: init at startup, shut down on exit
//! - Span export can be disabled by config; logging always stays on
//! - Business logic never touches the trace context directly; it only
//!   opens spans — injection/extraction lives here

pub mod logging;
pub mod propagation;
pub mod telemetry;

pub use logging::init;
