//! Nimbus - a terminal weather display.
//!
//! Nimbus looks up current conditions and a three-day forecast for a city or
//! U.S. postal code, seeding the location from the caller's IP address.
//!
//! # Features
//!
//! - IP geolocation of the default location
//! - Current conditions plus today, tomorrow and the day after
//! - Per-day hourly drill-down, limited to hours still ahead
//! - Times shown in the location's own time zone
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```ignore
//! use nimbus::api::WeatherClient;
//! use nimbus::config::WeatherApiConfig;
//!
//! let client = WeatherClient::new(WeatherApiConfig::default())?;
//! let record = client.fetch_weather("62701", 3).await?;
//! println!("{}: {}° F", record.location.name, record.current.temp_f);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod api;
pub mod app;
pub mod config;
pub mod dispatch;
pub mod display;
pub mod error;
pub mod input;
pub mod shared;
pub mod ui;

pub use error::{NimbusError, Result};
