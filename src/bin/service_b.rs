//! Service B — orchestrator.
//!
//! Accepts `GET /?cep=`, resolves the postal code to a city, the city to its
//! current temperature, converts the units, and responds with the report.
//! Continues the trace the ingress started.

use tokio::net::TcpListener;

use cep_weather::http::orchestrator::{self, OrchestratorState};
use cep_weather::{config, observability};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load()?;
    let provider = observability::init("service-b", &config)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        directory_base_url = %config.upstream.directory_base_url,
        weather_base_url = %config.upstream.weather_base_url,
        api_key_set = !config.upstream.weather_api_key.is_empty(),
        "configuration loaded"
    );

    let app = orchestrator::router(OrchestratorState::new(&config));
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "service-b listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(provider) = provider {
        observability::telemetry::shutdown(provider);
    }
    tracing::info!("shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("shutdown signal received");
}
