//! IP geolocation client.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::schema::LocationData;
use crate::config::GeolocationConfig;
use crate::error::{NimbusError, Result};

/// Status envelope some providers wrap around a 200 response.
#[derive(Debug, Default, Deserialize)]
struct ProviderStatus {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Resolves the caller's approximate location from their network address.
#[derive(Debug, Clone)]
pub struct GeolocationClient {
    client: Client,
    config: GeolocationConfig,
}

impl GeolocationClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: GeolocationConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| NimbusError::Config(format!("geolocation client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Look up the caller's location.
    ///
    /// # Errors
    ///
    /// Any network, HTTP or decode failure is reported as
    /// [`NimbusError::Geolocation`] with the provider's message.
    #[instrument(skip(self), fields(url = %self.config.base_url))]
    pub async fn fetch_location(&self) -> Result<LocationData> {
        let response = self
            .client
            .get(&self.config.base_url)
            .send()
            .await
            .map_err(|e| NimbusError::geolocation(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| NimbusError::geolocation(e.to_string()))?;

        let envelope: ProviderStatus = serde_json::from_slice(&body).unwrap_or_default();

        if !status.is_success() {
            let message = envelope
                .message
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(NimbusError::geolocation(message));
        }

        if envelope.status.as_deref() == Some("fail") {
            let message = envelope
                .message
                .unwrap_or_else(|| "lookup failed".to_string());
            return Err(NimbusError::geolocation(message));
        }

        let location: LocationData = serde_json::from_slice(&body)
            .map_err(|e| NimbusError::geolocation(format!("invalid response: {}", e)))?;

        debug!(
            city = %location.city_name,
            region = %location.region_name,
            "Resolved IP location"
        );
        Ok(location)
    }
}
