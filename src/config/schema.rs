//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files and
//! carry defaults matching the deployed environment of the original system.

use serde::{Deserialize, Serialize};
use std::env;

/// Root configuration shared by both services.
///
/// Service A reads `forward`; Service B reads `upstream`. Keeping one schema
/// lets both binaries share the loader and a single config file.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Ingress → orchestrator forwarding (Service A only).
    pub forward: ForwardConfig,

    /// External lookup services (Service B only).
    pub upstream: UpstreamConfig,

    /// Trace export settings.
    pub telemetry: TelemetryConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Where the ingress forwards validated requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ForwardConfig {
    /// Base URL of the orchestrator (Service B).
    pub orchestrator_url: String,
}

impl Default for ForwardConfig {
    fn default() -> Self {
        Self {
            orchestrator_url: "http://localhost:8081".to_string(),
        }
    }
}

/// External lookup services the orchestrator calls.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Postal-code directory base URL.
    pub directory_base_url: String,

    /// Weather provider base URL.
    pub weather_base_url: String,

    /// Weather provider credential. Empty means unset; the weather resolver
    /// rejects lookups with a 400 rather than calling out without a key.
    pub weather_api_key: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            directory_base_url: "https://viacep.com.br/ws".to_string(),
            weather_base_url: "https://api.weatherapi.com/v1".to_string(),
            weather_api_key: String::new(),
        }
    }
}

/// Trace export settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Export spans via OTLP. Disabled keeps logging but skips the exporter.
    pub enabled: bool,

    /// OTLP/HTTP traces endpoint, full path included.
    pub endpoint: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "http://localhost:4318/v1/traces".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default log filter when RUST_LOG is not set.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info,cep_weather=debug".to_string(),
        }
    }
}

impl AppConfig {
    /// Overlay environment variables onto the loaded configuration.
    ///
    /// Variable names follow the original deployment contract: `PORT`,
    /// `SERVICE_B_URL`, `API_KEY`, `OTEL_EXPORTER_OTLP_ENDPOINT`, plus
    /// `CEP_DIRECTORY_URL` / `WEATHER_API_URL` for pointing lookups at stubs.
    pub fn apply_env(&mut self) {
        if let Ok(port) = env::var("PORT") {
            self.listener.bind_address = format!("0.0.0.0:{port}");
        }
        if let Ok(value) = env::var("SERVICE_B_URL") {
            self.forward.orchestrator_url = value;
        }
        if let Ok(value) = env::var("API_KEY") {
            self.upstream.weather_api_key = value;
        }
        if let Ok(value) = env::var("CEP_DIRECTORY_URL") {
            self.upstream.directory_base_url = value;
        }
        if let Ok(value) = env::var("WEATHER_API_URL") {
            self.upstream.weather_base_url = value;
        }
        if let Ok(value) = env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
            self.telemetry.endpoint = value;
        }
    }
}
