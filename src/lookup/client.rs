//! Generic HTTP GET-and-decode primitive.
//!
//! Both resolvers go through [`LookupClient::fetch_json`]; the caller picks
//! the response shape, this layer only distinguishes transport, status, and
//! decode failures. Upstream status codes are surfaced verbatim — remapping
//! them to domain errors is the resolver's job.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure modes of one outbound lookup.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The upstream answered with a non-success status; carried verbatim.
    #[error("unexpected status code: {}", .0.as_u16())]
    UpstreamStatus(StatusCode),

    /// DNS, connect, or timeout failure before a response arrived.
    #[error("error sending request: {0}")]
    Transport(#[source] reqwest::Error),

    /// The body did not decode into the expected shape.
    #[error("error parsing response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl LookupError {
    /// HTTP status this failure maps to at the handler boundary.
    pub fn status(&self) -> StatusCode {
        match self {
            LookupError::UpstreamStatus(status) => *status,
            LookupError::Transport(_) | LookupError::Decode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Shared outbound HTTP client for external lookups.
#[derive(Debug, Clone, Default)]
pub struct LookupClient {
    http: reqwest::Client,
}

impl LookupClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// Issue a GET and decode the JSON body into `T`.
    ///
    /// The future is bound to the caller's task: cancellation of the inbound
    /// request drops this future and aborts the connection. No retries.
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, LookupError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(LookupError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::UpstreamStatus(status));
        }

        response.json::<T>().await.map_err(LookupError::Decode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        value: u32,
    }

    #[tokio::test]
    async fn decodes_successful_response() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/payload");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"value": 7}));
        });

        let client = LookupClient::new();
        let payload: Payload = client.fetch_json(&server.url("/payload")).await.unwrap();
        assert_eq!(payload.value, 7);
        mock.assert();
    }

    #[tokio::test]
    async fn surfaces_upstream_status_verbatim() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/payload");
            then.status(503);
        });

        let client = LookupClient::new();
        let err = client
            .fetch_json::<Payload>(&server.url("/payload"))
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::UpstreamStatus(s) if s.as_u16() == 503));
        assert_eq!(err.status().as_u16(), 503);
        assert_eq!(err.to_string(), "unexpected status code: 503");
    }

    #[tokio::test]
    async fn maps_decode_failure_to_internal() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/payload");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("not json");
        });

        let client = LookupClient::new();
        let err = client
            .fetch_json::<Payload>(&server.url("/payload"))
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::Decode(_)));
        assert_eq!(err.status().as_u16(), 500);
    }

    #[tokio::test]
    async fn maps_transport_failure_to_internal() {
        // Port 1 is unassigned on loopback; the connection is refused.
        let client = LookupClient::new();
        let err = client
            .fetch_json::<Payload>("http://127.0.0.1:1/payload")
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::Transport(_)));
        assert_eq!(err.status().as_u16(), 500);
    }
}
