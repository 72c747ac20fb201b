//! W3C trace-context propagation over HTTP headers.
//!
//! The ingress injects the active span's context into its outbound request;
//! the orchestrator extracts it and parents its request span on the result,
//! so both services' spans share one trace. Handlers call these two
//! functions and never look inside the headers themselves.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use opentelemetry::global;
use opentelemetry::propagation::{Extractor, Injector};
use tracing::Span;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// W3C Trace Context header name.
pub const TRACEPARENT: &str = "traceparent";

struct HeaderExtractor<'a>(&'a HeaderMap);

impl<'a> Extractor for HeaderExtractor<'a> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(|k| k.as_str()).collect()
    }
}

struct HeaderInjector<'a>(&'a mut HeaderMap);

impl<'a> Injector for HeaderInjector<'a> {
    fn set(&mut self, key: &str, value: String) {
        if let Ok(name) = HeaderName::from_bytes(key.as_bytes()) {
            if let Ok(val) = HeaderValue::from_str(&value) {
                self.0.insert(name, val);
            }
        }
    }
}

/// Inject the current span's trace context into outbound request headers.
pub fn inject_context(headers: &mut HeaderMap) {
    let cx = Span::current().context();
    global::get_text_map_propagator(|propagator| {
        propagator.inject_context(&cx, &mut HeaderInjector(headers));
    });
}

/// Parent `span` on the trace context carried by inbound request headers.
///
/// Without a traceparent header the span stays a root, starting a new trace.
/// The trace id is also recorded on the span for log correlation when the
/// span declares a `trace_id` field.
pub fn set_parent_from_headers(span: &Span, headers: &HeaderMap) {
    let parent_cx = global::get_text_map_propagator(|propagator| {
        propagator.extract(&HeaderExtractor(headers))
    });
    span.set_parent(parent_cx);

    if let Some(traceparent) = headers.get(TRACEPARENT).and_then(|v| v.to_str().ok()) {
        if let Some(trace_id) = parse_trace_id(traceparent) {
            span.record("trace_id", trace_id.as_str());
        }
    }
}

/// Parse the trace id out of a W3C traceparent value
/// (format: `00-{trace_id}-{span_id}-{flags}`).
pub fn parse_trace_id(traceparent: &str) -> Option<String> {
    let parts: Vec<&str> = traceparent.split('-').collect();
    if parts.len() >= 4 && parts[0] == "00" {
        Some(parts[1].to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::propagation::TextMapPropagator;
    use opentelemetry::trace::TraceContextExt;
    use opentelemetry_sdk::propagation::TraceContextPropagator;

    const SAMPLE_TRACEPARENT: &str = "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01";
    const SAMPLE_TRACE_ID: &str = "4bf92f3577b34da6a3ce929d0e0e4736";

    #[test]
    fn parse_trace_id_ok() {
        assert_eq!(
            parse_trace_id(SAMPLE_TRACEPARENT),
            Some(SAMPLE_TRACE_ID.to_string())
        );
    }

    #[test]
    fn parse_trace_id_invalid() {
        assert!(parse_trace_id("invalid").is_none());
        assert!(parse_trace_id("").is_none());
        assert!(parse_trace_id("99-abc-def-01").is_none());
    }

    #[test]
    fn trace_id_survives_extract_inject_round_trip() {
        let propagator = TraceContextPropagator::new();

        let mut inbound = HeaderMap::new();
        inbound.insert(TRACEPARENT, SAMPLE_TRACEPARENT.parse().unwrap());
        let cx = propagator.extract(&HeaderExtractor(&inbound));
        assert_eq!(
            cx.span().span_context().trace_id().to_string(),
            SAMPLE_TRACE_ID
        );

        let mut outbound = HeaderMap::new();
        propagator.inject_context(&cx, &mut HeaderInjector(&mut outbound));
        let forwarded = outbound.get(TRACEPARENT).unwrap().to_str().unwrap();
        assert_eq!(parse_trace_id(forwarded), Some(SAMPLE_TRACE_ID.to_string()));
    }

    #[test]
    fn set_parent_from_headers_does_not_panic_without_context() {
        let span = tracing::info_span!("test", trace_id = tracing::field::Empty);
        set_parent_from_headers(&span, &HeaderMap::new());

        let mut headers = HeaderMap::new();
        headers.insert(TRACEPARENT, SAMPLE_TRACEPARENT.parse().unwrap());
        set_parent_from_headers(&span, &headers);
    }

    #[test]
    fn inject_context_without_active_span_leaves_headers_untouched() {
        // No subscriber and no global propagator configured here, so nothing
        // valid exists to inject.
        let mut headers = HeaderMap::new();
        inject_context(&mut headers);
        assert!(headers.get(TRACEPARENT).is_none());
    }
}
