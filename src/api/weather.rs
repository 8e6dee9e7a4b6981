//! Weather provider client.

use reqwest::Client;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use super::schema::{ProviderErrorBody, WeatherRecord};
use crate::config::WeatherApiConfig;
use crate::error::{NimbusError, Result};

/// Which provider endpoint to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForecastMode {
    /// Current conditions plus daily and hourly forecast.
    #[default]
    Forecast,
    /// Current conditions only.
    Current,
}

impl ForecastMode {
    /// Endpoint path relative to the API base.
    pub fn endpoint(self) -> &'static str {
        match self {
            ForecastMode::Forecast => "forecast.json",
            ForecastMode::Current => "current.json",
        }
    }
}

/// Fetches conditions and forecasts for a free-text location.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    config: WeatherApiConfig,
}

impl WeatherClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| NimbusError::Config(format!("weather client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Full endpoint URL for `mode`.
    pub fn endpoint_url(&self, mode: ForecastMode) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            mode.endpoint()
        )
    }

    /// Query parameters for a lookup of `query`.
    pub fn query_params(&self, query: &str, days: u8, mode: ForecastMode) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("key", self.config.api_key.clone().unwrap_or_default()),
            ("q", query.to_string()),
        ];
        if mode == ForecastMode::Forecast {
            params.push(("days", days.to_string()));
        }
        params.push(("aqi", "no".to_string()));
        params
    }

    /// Fetch a forecast for `query`.
    ///
    /// # Errors
    ///
    /// See [`WeatherClient::fetch`].
    pub async fn fetch_weather(&self, query: &str, days: u8) -> Result<WeatherRecord> {
        self.fetch(query, days, ForecastMode::Forecast, &CancellationToken::new())
            .await
    }

    /// Fetch weather for `query`, giving up early when `cancel` fires.
    ///
    /// # Errors
    ///
    /// - [`NimbusError::EmptyQuery`] if `query` is empty.
    /// - [`NimbusError::RequestCanceled`] if `cancel` fires first.
    /// - [`NimbusError::WeatherFetch`] for network failures, non-2xx
    ///   responses (carrying the provider's message) and undecodable bodies.
    #[instrument(skip(self, cancel), fields(mode = ?mode))]
    pub async fn fetch(
        &self,
        query: &str,
        days: u8,
        mode: ForecastMode,
        cancel: &CancellationToken,
    ) -> Result<WeatherRecord> {
        if query.is_empty() {
            return Err(NimbusError::EmptyQuery);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Weather request canceled");
                Err(NimbusError::RequestCanceled)
            }
            result = self.send(query, days, mode) => result,
        }
    }

    async fn send(&self, query: &str, days: u8, mode: ForecastMode) -> Result<WeatherRecord> {
        let response = self
            .client
            .get(self.endpoint_url(mode))
            .query(&self.query_params(query, days, mode))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ProviderErrorBody>(&body)
                .map(|b| b.error.message)
                .unwrap_or_else(|_| format!("HTTP {}", status));
            return Err(NimbusError::weather_fetch(Some(status.as_u16()), message));
        }

        let body = response.bytes().await?;
        let record: WeatherRecord = serde_json::from_slice(&body).map_err(|e| {
            NimbusError::weather_fetch(
                Some(status.as_u16()),
                format!("Failed to parse weather response: {}", e),
            )
        })?;

        debug!(
            location = %record.location.name,
            days = record.forecast.forecastday.len(),
            "Weather response decoded"
        );
        Ok(record)
    }
}
