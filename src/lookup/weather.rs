//! City → current temperature resolution against the weather provider.

use tracing::Instrument;
use url::Url;

use crate::domain::model::WeatherResponse;
use crate::http::error::PipelineError;
use crate::lookup::client::LookupClient;

#[derive(Debug, Clone)]
pub struct WeatherResolver {
    client: LookupClient,
    base_url: String,
    api_key: String,
}

impl WeatherResolver {
    pub fn new(
        client: LookupClient,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Resolve a city name to its current temperature in Celsius.
    ///
    /// Requires the provider credential; without one this fails immediately
    /// with no outbound call. The lookup runs in one `resolve_weather` span
    /// recording the temperature on success.
    pub async fn resolve(&self, city: &str) -> Result<f64, PipelineError> {
        if self.api_key.is_empty() {
            return Err(PipelineError::MissingApiKey);
        }

        let span = tracing::info_span!(
            "resolve_weather",
            city = %city,
            temperature = tracing::field::Empty,
            error.message = tracing::field::Empty,
            error.status = tracing::field::Empty,
        );
        let result = self.lookup(city).instrument(span.clone()).await;
        match &result {
            Ok(celsius) => {
                span.record("temperature", *celsius);
            }
            Err(err) => {
                span.record("error.message", err.to_string().as_str());
                span.record("error.status", err.status().as_u16());
            }
        }
        result
    }

    async fn lookup(&self, city: &str) -> Result<f64, PipelineError> {
        // parse_with_params escapes the city name for the query string.
        let url = Url::parse_with_params(
            &format!("{}/current.json", self.base_url.trim_end_matches('/')),
            &[("key", self.api_key.as_str()), ("q", city), ("lang", "pt")],
        )
        .map_err(|e| PipelineError::Internal(format!("error building weather url: {e}")))?;

        let response = self
            .client
            .fetch_json::<WeatherResponse>(url.as_str())
            .await
            .map_err(PipelineError::from_lookup)?;

        tracing::debug!(celsius = response.current.temp_c, "resolved temperature");
        Ok(response.current.temp_c)
    }
}
