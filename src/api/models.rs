use serde::Deserialize;
use std::collections::HashMap;

/// Historical-rates response body.
///
/// On success the provider returns a `rates` object mapping currency codes to
/// rates relative to USD. On an application-level failure it returns
/// `error: true` plus `message`/`description` instead.
#[derive(Debug, Deserialize)]
pub struct HistoricalRatesResponse {
    #[serde(default)]
    pub error: bool,
    pub message: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub rates: HashMap<String, f64>,
}

impl HistoricalRatesResponse {
    /// Provider-reported error message, preferring the human-readable
    /// description over the short code.
    pub fn error_message(&self) -> String {
        self.description
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| "Unknown error".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_rates() {
        let json = r#"{
            "disclaimer": "Usage subject to terms",
            "base": "USD",
            "rates": {
                "BRL": 4.9,
                "EUR": 0.92
            }
        }"#;
        let response: HistoricalRatesResponse = serde_json::from_str(json).unwrap();
        assert!(!response.error);
        assert_eq!(response.rates.len(), 2);
        assert_eq!(response.rates["BRL"], 4.9);
    }

    #[test]
    fn test_deserialize_missing_rates_defaults_to_empty() {
        let json = r#"{"base": "USD"}"#;
        let response: HistoricalRatesResponse = serde_json::from_str(json).unwrap();
        assert!(response.rates.is_empty());
    }

    #[test]
    fn test_deserialize_provider_error() {
        let json = r#"{
            "error": true,
            "status": 400,
            "message": "not_available",
            "description": "Historical rates not available for this date."
        }"#;
        let response: HistoricalRatesResponse = serde_json::from_str(json).unwrap();
        assert!(response.error);
        assert_eq!(
            response.error_message(),
            "Historical rates not available for this date."
        );
    }

    #[test]
    fn test_error_message_falls_back_to_code() {
        let json = r#"{"error": true, "message": "not_available"}"#;
        let response: HistoricalRatesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.error_message(), "not_available");

        let json = r#"{"error": true}"#;
        let response: HistoricalRatesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.error_message(), "Unknown error");
    }
}
