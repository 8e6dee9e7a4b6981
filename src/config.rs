//! Runtime configuration.
//!
//! Values come from the command line (with environment fallbacks) in
//! `main.rs`; everything else falls back to the defaults below.

use std::time::Duration;

/// Number of forecast days requested from the provider.
pub const FORECAST_DAYS: u8 = 3;

/// Root configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Weather provider settings.
    pub weather: WeatherApiConfig,
    /// IP geolocation provider settings.
    pub geolocation: GeolocationConfig,
}

/// Weather provider settings.
#[derive(Debug, Clone)]
pub struct WeatherApiConfig {
    /// Base URL, without the `forecast.json` / `current.json` endpoint.
    pub base_url: String,
    /// API key. A missing key is sent as empty and rejected by the provider.
    pub api_key: Option<String>,
    /// Forecast days per request.
    pub days: u8,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// IP geolocation provider settings.
#[derive(Debug, Clone)]
pub struct GeolocationConfig {
    /// Full lookup URL; requested without path or query parameters.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

fn default_weather_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

fn default_geolocation_base_url() -> String {
    "http://ip-api.com/json".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            api_key: None,
            days: FORECAST_DAYS,
            timeout_secs: default_timeout(),
        }
    }
}

impl WeatherApiConfig {
    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            base_url: default_geolocation_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl GeolocationConfig {
    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Point both providers at explicit base URLs.
    pub fn with_base_urls(weather: impl Into<String>, geolocation: impl Into<String>) -> Self {
        Self {
            weather: WeatherApiConfig {
                base_url: weather.into(),
                ..WeatherApiConfig::default()
            },
            geolocation: GeolocationConfig {
                base_url: geolocation.into(),
                ..GeolocationConfig::default()
            },
        }
    }

    /// Apply the same timeout to both providers.
    pub fn set_timeout(&mut self, secs: u64) {
        self.weather.timeout_secs = secs;
        self.geolocation.timeout_secs = secs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_request_three_days_without_key() {
        let config = Config::default();
        assert_eq!(config.weather.days, 3);
        assert!(config.weather.api_key.is_none());
        assert!(config.weather.base_url.starts_with("https://api.weatherapi.com"));
        assert_eq!(config.geolocation.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn timeout_applies_to_both_providers() {
        let mut config = Config::with_base_urls("http://w", "http://g");
        config.set_timeout(3);
        assert_eq!(config.weather.timeout(), Duration::from_secs(3));
        assert_eq!(config.geolocation.timeout(), Duration::from_secs(3));
        assert_eq!(config.weather.base_url, "http://w");
    }
}
