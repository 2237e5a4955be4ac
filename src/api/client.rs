use crate::api::models::HistoricalRatesResponse;
use crate::error::ApiError;
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("fx-cli/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_BASE_URL: &str = "https://openexchangerates.org/api";

/// Open Exchange Rates client. All sheet values are relative to USD; a
/// cross-rate between two currencies is the ratio of their USD rates.
#[derive(Debug, Clone)]
pub struct FxClient {
    client: Client,
    base_url: String,
    app_id: String,
}

impl FxClient {
    pub fn new(base_url: String, app_id: String) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Network {
                endpoint: "client_init".to_string(),
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(FxClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            app_id,
        })
    }

    /// Fetch the full rate sheet for one historical date.
    pub async fn get_historical_rates(
        &self,
        date: &str,
    ) -> Result<HashMap<String, f64>, ApiError> {
        let endpoint = format!("/historical/{}.json", date);
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .get(url)
            .query(&[
                ("app_id", self.app_id.as_str()),
                ("show_alternative", "false"),
                ("prettyprint", "false"),
            ])
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network {
                endpoint: endpoint.clone(),
                message: e.to_string(),
            })?;

        let body = self.handle_response(response, &endpoint).await?;

        if body.error {
            return Err(ApiError::Api {
                message: body.error_message(),
            });
        }

        Ok(body.rates)
    }

    /// Rate for one currency relative to USD on the given date.
    pub async fn get_rate(&self, date: &str, currency: &str) -> Result<f64, ApiError> {
        let currency = currency.to_uppercase();
        let rates = self.get_historical_rates(date).await?;

        rates.get(&currency).copied().ok_or(ApiError::NotFound {
            currency,
            date: date.to_string(),
        })
    }

    /// Cross-rate between two currencies on the given date, derived from one
    /// sheet fetch as `to_rate / from_rate`. Native float division; a zero
    /// rate yields inf/NaN rather than an error.
    pub async fn convert_currency(
        &self,
        date: &str,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<f64, ApiError> {
        let from_currency = from_currency.to_uppercase();
        let to_currency = to_currency.to_uppercase();
        let rates = self.get_historical_rates(date).await?;

        let from_rate = *rates.get(&from_currency).ok_or(ApiError::NotFound {
            currency: from_currency,
            date: date.to_string(),
        })?;
        let to_rate = *rates.get(&to_currency).ok_or(ApiError::NotFound {
            currency: to_currency,
            date: date.to_string(),
        })?;

        Ok(to_rate / from_rate)
    }

    async fn handle_response(
        &self,
        response: Response,
        endpoint: &str,
    ) -> Result<HistoricalRatesResponse, ApiError> {
        let status = response.status();

        if status.is_success() {
            response
                .json::<HistoricalRatesResponse>()
                .await
                .map_err(|e| ApiError::Format {
                    message: e.to_string(),
                })
        } else {
            match status.as_u16() {
                401 | 403 => Err(ApiError::Unauthorized {
                    status: status.as_u16(),
                    endpoint: endpoint.to_string(),
                }),
                _ => {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(ApiError::Network {
                        endpoint: endpoint.to_string(),
                        message: format!("HTTP {}: {}", status.as_u16(), error_text),
                    })
                }
            }
        }
    }
}
