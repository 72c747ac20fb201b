//! Structured logging initialization.
//!
//! One registry per binary: env-filtered fmt layer for stdout, plus the
//! OpenTelemetry layer when span export is enabled. Returns the tracer
//! provider handle so the binary can drain it on shutdown.

use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::AppConfig;
use crate::observability::telemetry;

/// Initialize logging and tracing for one service.
///
/// `RUST_LOG` wins over the configured log level. Panics if a subscriber is
/// already installed, so call exactly once per process.
pub fn init(service_name: &str, config: &AppConfig) -> anyhow::Result<Option<SdkTracerProvider>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));

    let provider = if config.telemetry.enabled {
        let (provider, otel_layer) = telemetry::build_layer(service_name, &config.telemetry)?;
        tracing_subscriber::registry()
            .with(otel_layer)
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
        Some(provider)
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
        None
    };

    tracing::info!(service = service_name, "logging initialized");
    Ok(provider)
}
