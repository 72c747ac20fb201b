//! Wire-level request and response shapes.
//!
//! The upstream shapes mirror external contracts this system does not own:
//! the postal-code directory returns `localidade`, the weather provider
//! returns `current.temp_c`. Only the fields we consume are modeled.

use serde::{Deserialize, Serialize};

/// Inbound ingress body: `{ "cep": "01001000" }`.
///
/// A body without the `cep` key decodes to an empty string, which then fails
/// the 8-digit check with a 422; only malformed JSON is a 400.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZipCodeRequest {
    #[serde(default)]
    pub cep: String,
}

/// Postal-code directory response.
///
/// Unknown CEPs come back as a 200 with the locality absent (`{"erro": true}`),
/// so the field defaults to empty and the resolver treats empty as not found.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryResponse {
    #[serde(default)]
    pub localidade: String,
}

/// Weather provider response, current conditions only.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    pub current: CurrentConditions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
}

/// JSON error envelope shared by both services: `{ "message": "..." }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub message: String,
}
