//! Temperature unit conversion and the final response payload.

use serde::{Deserialize, Serialize};

/// Final response body for a successful lookup.
///
/// Field names on the wire are fixed by the public contract
/// (`temp_C` / `temp_F` / `temp_K`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReport {
    pub city: String,
    #[serde(rename = "temp_C")]
    pub celsius: f64,
    #[serde(rename = "temp_F")]
    pub fahrenheit: f64,
    #[serde(rename = "temp_K")]
    pub kelvin: f64,
}

impl TemperatureReport {
    /// Build a report from a resolved city and its Celsius reading.
    ///
    /// `kelvin` uses the 273 offset the upstream contract fixes, not 273.15.
    pub fn from_celsius(city: impl Into<String>, celsius: f64) -> Self {
        Self {
            city: city.into(),
            celsius,
            fahrenheit: celsius * 1.8 + 32.0,
            kelvin: celsius + 273.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn converts_reference_value() {
        let report = TemperatureReport::from_celsius("São Paulo", 28.5);
        assert_eq!(report.city, "São Paulo");
        assert!((report.celsius - 28.5).abs() < TOLERANCE);
        assert!((report.fahrenheit - 83.3).abs() < TOLERANCE);
        assert!((report.kelvin - 301.5).abs() < TOLERANCE);
    }

    #[test]
    fn converts_freezing_point() {
        let report = TemperatureReport::from_celsius("Gramado", 0.0);
        assert!((report.fahrenheit - 32.0).abs() < TOLERANCE);
        assert!((report.kelvin - 273.0).abs() < TOLERANCE);
    }

    #[test]
    fn converts_negative_celsius() {
        let report = TemperatureReport::from_celsius("Urupema", -10.0);
        assert!((report.fahrenheit - 14.0).abs() < TOLERANCE);
        assert!((report.kelvin - 263.0).abs() < TOLERANCE);
    }

    #[test]
    fn serializes_contract_field_names() {
        let report = TemperatureReport::from_celsius("São Paulo", 28.5);
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("temp_C").is_some());
        assert!(value.get("temp_F").is_some());
        assert!(value.get("temp_K").is_some());
        assert!(value.get("celsius").is_none());
    }
}
