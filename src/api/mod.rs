//! Provider clients.
//!
//! This module wraps the two external HTTP services the display depends on:
//! - IP geolocation, used to seed the location query
//! - The weather provider, queried with free text or a postal code
//!
//! Both clients decode into the shapes defined in [`schema`].

pub mod geolocation;
pub mod schema;
pub mod weather;

pub use geolocation::GeolocationClient;
pub use schema::{LocationData, WeatherRecord};
pub use weather::{ForecastMode, WeatherClient};
