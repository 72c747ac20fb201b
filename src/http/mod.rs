//! HTTP surfaces of both services.
//!
//! # Data Flow
//! ```text
//! Service A (ingress):
//!     POST / → ingress.rs (method check, decode, validate)
//!         → forward GET to Service B with trace headers injected
//!         → relay status/body to the client
//!
//! Service B (orchestrator):
//!     GET /?cep= → orchestrator.rs (extract trace parent, validate)
//!         → lookup::city → lookup::weather → domain::temperature
//!         → 200 TemperatureReport, or { message } with the failing
//!           step's status
//! ```
//!
//! # Design Decisions
//! - Errors are values: handlers turn PipelineError into responses, nothing
//!   panics across a request boundary
//! - The ingress relays the orchestrator's status/message pair verbatim;
//!   only its own transport failures become a fresh 500
//! - Request IDs (UUID v4) are attached and propagated as x-request-id

pub mod error;
pub mod ingress;
pub mod orchestrator;
pub mod request_id;

pub use error::PipelineError;
pub use ingress::IngressState;
pub use orchestrator::OrchestratorState;
pub use request_id::{UuidRequestId, X_REQUEST_ID};
