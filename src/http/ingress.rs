//! Ingress (Service A) router and handler.
//!
//! Validates the inbound `{ "cep": ... }` body, forwards the lookup to the
//! orchestrator over HTTP with the active trace context injected into the
//! outbound headers, and relays the orchestrator's status/body back to the
//! client. The forward is a plain GET; the response body streams through
//! unbuffered on the success path.

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::Instrument;

use crate::config::AppConfig;
use crate::domain::cep::Cep;
use crate::domain::model::{ErrorEnvelope, ZipCodeRequest};
use crate::http::error::PipelineError;
use crate::http::request_id::UuidRequestId;
use crate::observability::propagation;

/// Largest orchestrator error body the relay will buffer for decoding.
const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;

/// Application state injected into the ingress handler.
#[derive(Clone)]
pub struct IngressState {
    client: Client<HttpConnector, Body>,
    orchestrator_url: String,
}

impl IngressState {
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self {
            client,
            orchestrator_url: config.forward.orchestrator_url.clone(),
        }
    }
}

/// Build the Service A router with its middleware layers.
///
/// Non-POST methods fall through to a plain-text 405, independent of the
/// JSON error envelope used elsewhere.
pub fn router(state: IngressState) -> Router {
    Router::new()
        .route("/", post(handle_zipcode).fallback(method_not_allowed))
        .with_state(state)
        .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
}

async fn method_not_allowed() -> Response {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response()
}

async fn handle_zipcode(State(state): State<IngressState>, body: Bytes) -> Response {
    let span = tracing::info_span!(
        "handle_request",
        cep = tracing::field::Empty,
        otel.kind = "server",
        error.message = tracing::field::Empty,
    );

    async move {
        // Decode failures answer in plain text, not the JSON envelope.
        // Preserved from the original contract.
        let request: ZipCodeRequest = match serde_json::from_slice(&body) {
            Ok(request) => request,
            Err(_) => return (StatusCode::BAD_REQUEST, "Invalid Request").into_response(),
        };

        let span = tracing::Span::current();
        span.record("cep", request.cep.as_str());

        let cep: Cep = match request.cep.parse() {
            Ok(cep) => cep,
            Err(_) => {
                span.record("error.message", "invalid zipcode");
                return PipelineError::InvalidZipcode.into_response();
            }
        };

        match forward(&state, &cep).await {
            Ok(response) => response,
            Err(err) => {
                span.record("error.message", err.to_string().as_str());
                tracing::warn!(cep = %cep, status = err.status().as_u16(), error = %err, "forward failed");
                err.into_response()
            }
        }
    }
    .instrument(span)
    .await
}

/// Forward the validated CEP to the orchestrator and relay its answer.
///
/// Transport failures become a fresh 500; any non-200 answer is decoded into
/// the `{ message }` envelope and relayed with the original status; a 200
/// streams back to the client untouched.
async fn forward(state: &IngressState, cep: &Cep) -> Result<Response, PipelineError> {
    let span = tracing::info_span!(
        "forward_to_orchestrator",
        cep = %cep,
        otel.kind = "client",
    );

    async move {
        let uri = format!(
            "{}/?cep={}",
            state.orchestrator_url.trim_end_matches('/'),
            cep
        );
        let mut request = Request::builder()
            .method(Method::GET)
            .uri(&uri)
            .body(Body::empty())
            .map_err(|e| PipelineError::Internal(format!("error creating request: {e}")))?;

        // The orchestrator's span becomes a child of this request's trace.
        propagation::inject_context(request.headers_mut());

        tracing::debug!(uri = %uri, "forwarding zipcode lookup");
        let response = state.client.request(request).await.map_err(|e| {
            PipelineError::Internal(format!("error sending request to orchestrator: {e}"))
        })?;

        let (parts, body) = response.into_parts();
        if parts.status == StatusCode::OK {
            return Ok(Response::from_parts(parts, Body::new(body)).into_response());
        }

        let bytes = axum::body::to_bytes(Body::new(body), MAX_ERROR_BODY_BYTES)
            .await
            .map_err(|e| {
                PipelineError::Internal(format!("error reading orchestrator response: {e}"))
            })?;
        // An undecodable error body still relays the original status; the
        // message just comes back empty.
        let envelope: ErrorEnvelope =
            serde_json::from_slice(&bytes).unwrap_or(ErrorEnvelope {
                message: String::new(),
            });

        Err(PipelineError::Upstream {
            status: parts.status,
            message: envelope.message,
        })
    }
    .instrument(span)
    .await
}
