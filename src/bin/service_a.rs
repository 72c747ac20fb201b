//! Service A — ingress.
//!
//! Accepts `POST / { "cep": ... }`, validates the postal code, forwards the
//! lookup to Service B with trace headers injected, and relays the answer.

use tokio::net::TcpListener;

use cep_weather::http::ingress::{self, IngressState};
use cep_weather::{config, observability};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::load()?;
    let provider = observability::init("service-a", &config)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        orchestrator_url = %config.forward.orchestrator_url,
        "configuration loaded"
    );

    let app = ingress::router(IngressState::new(&config));
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "service-a listening");

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
