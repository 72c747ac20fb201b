//! Pipeline error taxonomy and its HTTP mapping.
//!
//! Every failure a resolver or handler can produce lives here, together with
//! the status code and `{ "message": ... }` envelope it turns into at the
//! handler boundary. Errors short-circuit; nothing is retried or swallowed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::domain::model::ErrorEnvelope;
use crate::lookup::client::LookupError;

/// A failure at any step of the request pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input was not an 8-digit postal code. 422.
    #[error("invalid zipcode")]
    InvalidZipcode,

    /// Syntactically valid postal code with no known city. 404.
    #[error("can not find zipcode")]
    ZipcodeNotFound,

    /// Weather provider credential missing from configuration. 400.
    #[error("no API key set")]
    MissingApiKey,

    /// An upstream answered with a non-success status; relayed, not translated.
    #[error("{message}")]
    Upstream { status: StatusCode, message: String },

    /// Transport failure, decode failure, or any unexpected condition. 500.
    #[error("{0}")]
    Internal(String),
}

impl PipelineError {
    pub fn status(&self) -> StatusCode {
        match self {
            PipelineError::InvalidZipcode => StatusCode::UNPROCESSABLE_ENTITY,
            PipelineError::ZipcodeNotFound => StatusCode::NOT_FOUND,
            PipelineError::MissingApiKey => StatusCode::BAD_REQUEST,
            PipelineError::Upstream { status, .. } => *status,
            PipelineError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Lift a lookup-client failure, preserving an upstream status verbatim.
    pub fn from_lookup(err: LookupError) -> Self {
        match err {
            LookupError::UpstreamStatus(status) => PipelineError::Upstream {
                status,
                message: format!("unexpected status code: {}", status.as_u16()),
            },
            other => PipelineError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        let envelope = ErrorEnvelope {
            message: self.to_string(),
        };
        (self.status(), Json(envelope)).into_response()
    }
}
