//! CEP → city resolution against the postal-code directory.

use tracing::Instrument;

use crate::domain::cep::Cep;
use crate::domain::model::DirectoryResponse;
use crate::http::error::PipelineError;
use crate::lookup::client::{LookupClient, LookupError};

#[derive(Debug, Clone)]
pub struct CityResolver {
    client: LookupClient,
    base_url: String,
}

impl CityResolver {
    pub fn new(client: LookupClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Resolve a raw CEP string to a city name.
    ///
    /// Re-validates the input before any network call; the lookup itself is
    /// wrapped in one `resolve_city` span recording the city on success or
    /// the error on failure.
    pub async fn resolve(&self, cep: &str) -> Result<String, PipelineError> {
        let cep: Cep = cep.parse().map_err(|_| PipelineError::InvalidZipcode)?;

        let span = tracing::info_span!(
            "resolve_city",
            cep = %cep,
            city = tracing::field::Empty,
            error.message = tracing::field::Empty,
            error.status = tracing::field::Empty,
        );
        let result = self.lookup(&cep).instrument(span.clone()).await;
        match &result {
            Ok(city) => {
                span.record("city", city.as_str());
            }
            Err(err) => {
                span.record("error.message", err.to_string().as_str());
                span.record("error.status", err.status().as_u16());
            }
        }
        result
    }

    async fn lookup(&self, cep: &Cep) -> Result<String, PipelineError> {
        let url = format!("{}/{}/json", self.base_url.trim_end_matches('/'), cep);
        let response = match self.client.fetch_json::<DirectoryResponse>(&url).await {
            Ok(response) => response,
            // The directory reports unknown CEPs either as a 404 or as a
            // success with the locality absent; both mean "not found" here.
            Err(LookupError::UpstreamStatus(status)) if status.as_u16() == 404 => {
                return Err(PipelineError::ZipcodeNotFound);
            }
            Err(err) => return Err(PipelineError::from_lookup(err)),
        };

        if response.localidade.is_empty() {
            return Err(PipelineError::ZipcodeNotFound);
        }

        tracing::debug!(city = %response.localidade, "resolved city");
        Ok(response.localidade)
    }
}
