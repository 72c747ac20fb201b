//! Orchestrator (Service B) router and handler.
//!
//! One inbound request walks `validate → resolve city → resolve weather →
//! convert → respond`; the first failing step short-circuits into the
//! `{ message }` envelope with that step's status. The whole sequence runs
//! under one span parented on the trace context the ingress injected.

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::Instrument;

use crate::config::AppConfig;
use crate::domain::temperature::TemperatureReport;
use crate::http::error::PipelineError;
use crate::http::request_id::{UuidRequestId, X_REQUEST_ID};
use crate::lookup::city::CityResolver;
use crate::lookup::client::LookupClient;
use crate::lookup::weather::WeatherResolver;

/// Application state injected into the orchestrator handler.
#[derive(Debug, Clone)]
pub struct OrchestratorState {
    pub city: CityResolver,
    pub weather: WeatherResolver,
}

impl OrchestratorState {
    /// Build both resolvers over one shared lookup client.
    pub fn new(config: &AppConfig) -> Self {
        let client = LookupClient::new();
        Self {
            city: CityResolver::new(client.clone(), config.upstream.directory_base_url.clone()),
            weather: WeatherResolver::new(
                client,
                config.upstream.weather_base_url.clone(),
                config.upstream.weather_api_key.clone(),
            ),
        }
    }
}

/// Build the Service B router with its middleware layers.
pub fn router(state: OrchestratorState) -> Router {
    Router::new()
        .route("/", get(handle_temperature))
        .with_state(state)
        .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
}

#[derive(Debug, Deserialize)]
struct TemperatureQuery {
    #[serde(default)]
    cep: String,
}

async fn handle_temperature(
    State(state): State<OrchestratorState>,
    Query(query): Query<TemperatureQuery>,
    headers: HeaderMap,
) -> Response {
    let span = tracing::info_span!(
        "handle_temperature",
        cep = %query.cep,
        otel.kind = "server",
        trace_id = tracing::field::Empty,
        error.message = tracing::field::Empty,
    );
    crate::observability::propagation::set_parent_from_headers(&span, &headers);

    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let result = resolve_pipeline(&state, &query.cep)
        .instrument(span.clone())
        .await;

    match result {
        Ok(report) => {
            // Success is always a 200, never the upstream's own status.
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(err) => {
            span.record("error.message", err.to_string().as_str());
            tracing::warn!(
                request_id = %request_id,
                cep = %query.cep,
                status = err.status().as_u16(),
                error = %err,
                "temperature lookup failed"
            );
            err.into_response()
        }
    }
}

/// Sequential composition: weather only runs once the city resolved.
async fn resolve_pipeline(
    state: &OrchestratorState,
    cep: &str,
) -> Result<TemperatureReport, PipelineError> {
    let city = state.city.resolve(cep).await?;
    let celsius = state.weather.resolve(&city).await?;
    Ok(TemperatureReport::from_celsius(city, celsius))
}
