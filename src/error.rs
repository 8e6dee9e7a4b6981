//! Error types for Nimbus.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Nimbus operations.
pub type Result<T> = std::result::Result<T, NimbusError>;

/// Errors that can occur in Nimbus.
#[derive(Debug, Error)]
pub enum NimbusError {
    /// IP geolocation lookup failed.
    #[error("Geolocation failed: {message}")]
    Geolocation {
        /// Provider or transport message.
        message: String,
    },

    /// Weather request failed (network, provider rejection or bad payload).
    #[error("{message}")]
    WeatherFetch {
        /// HTTP status reported by the provider, if a response was received.
        status: Option<u16>,
        /// Provider message, or `HTTP <status>` when it sent none.
        message: String,
    },

    /// The caller canceled the request before it completed.
    #[error("Request canceled")]
    RequestCanceled,

    /// A weather lookup was attempted without a location.
    #[error("Location query must not be empty")]
    EmptyQuery,

    /// The location query can never be valid.
    #[error("Invalid location '{query}': numeric input is longer than 5 digits")]
    InvalidQuery {
        /// The rejected text.
        query: String,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NimbusError {
    /// Create a Geolocation error.
    pub fn geolocation(message: impl Into<String>) -> Self {
        Self::Geolocation {
            message: message.into(),
        }
    }

    /// Create a WeatherFetch error.
    pub fn weather_fetch(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::WeatherFetch {
            status,
            message: message.into(),
        }
    }

    /// Create an InvalidQuery error.
    pub fn invalid_query(query: impl Into<String>) -> Self {
        Self::InvalidQuery {
            query: query.into(),
        }
    }

    /// Whether this error only records a cancellation.
    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::RequestCanceled)
    }

    /// HTTP status attached to a weather failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::WeatherFetch { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for NimbusError {
    fn from(err: reqwest::Error) -> Self {
        Self::WeatherFetch {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}
