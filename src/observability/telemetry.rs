//! OpenTelemetry tracer provider setup.
//!
//! Builds an OTLP/HTTP span exporter and a batching tracer provider, makes
//! them global, and registers the W3C TraceContext + Baggage propagators so
//! the ingress → orchestrator hop joins one trace.

use anyhow::Context as _;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::propagation::TextMapCompositePropagator;
use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::{Protocol, WithExportConfig};
use opentelemetry_sdk::propagation::{BaggagePropagator, TraceContextPropagator};
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;

use crate::config::schema::TelemetryConfig;

/// Layer type attached to the subscriber registry by the binaries.
pub type OtelLayer = tracing_opentelemetry::OpenTelemetryLayer<
    tracing_subscriber::Registry,
    opentelemetry_sdk::trace::Tracer,
>;

/// Build the tracer provider and the subscriber layer for one service.
///
/// The returned provider handle must be kept and `shutdown()` called on exit
/// so batched spans are drained. Also installs the global propagators.
pub fn build_layer(
    service_name: &str,
    config: &TelemetryConfig,
) -> anyhow::Result<(SdkTracerProvider, OtelLayer)> {
    global::set_text_map_propagator(TextMapCompositePropagator::new(vec![
        Box::new(TraceContextPropagator::new()),
        Box::new(BaggagePropagator::new()),
    ]));

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_http()
        .with_protocol(Protocol::HttpBinary)
        .with_endpoint(config.endpoint.clone())
        .build()
        .context("build OTLP HTTP span exporter")?;

    let resource = Resource::builder_empty()
        .with_attributes([KeyValue::new("service.name", service_name.to_string())])
        .build();

    let provider = SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(resource)
        .build();

    global::set_tracer_provider(provider.clone());

    let tracer = provider.tracer(service_name.to_string());
    let layer = tracing_opentelemetry::OpenTelemetryLayer::new(tracer);

    Ok((provider, layer))
}

/// Drain and shut down the provider; call once during process exit.
pub fn shutdown(provider: SdkTracerProvider) {
    if let Err(err) = provider.shutdown() {
        tracing::warn!(error = %err, "tracer provider shutdown failed");
    }
}
