//! Provider JSON shapes shared by both clients.
//!
//! Field names follow the providers' payloads. Only the fields the display
//! needs are modeled; everything else is ignored on decode.

use serde::{Deserialize, Deserializer, Serialize};

/// Result of an IP geolocation lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationData {
    /// Country name.
    #[serde(default, alias = "countryName")]
    pub country: String,
    /// ISO 3166 country code.
    #[serde(default)]
    pub country_code: String,
    /// State or region name.
    #[serde(default)]
    pub region_name: String,
    /// City name.
    #[serde(default, alias = "city")]
    pub city_name: String,
    /// Latitude in degrees.
    #[serde(default, alias = "latitude")]
    pub lat: f64,
    /// Longitude in degrees.
    #[serde(default, alias = "longitude")]
    pub lon: f64,
    /// Postal code.
    #[serde(default, alias = "zipCode")]
    pub zip: String,
    /// IANA zone name.
    #[serde(default, alias = "timeZone")]
    pub timezone: String,
}

impl LocationData {
    /// The query seeded from this location, `"<city>, <region>"`.
    ///
    /// Returns `None` when the provider did not resolve a city.
    pub fn query_text(&self) -> Option<String> {
        let city = self.city_name.trim();
        if city.is_empty() {
            return None;
        }
        let region = self.region_name.trim();
        if region.is_empty() {
            Some(city.to_string())
        } else {
            Some(format!("{}, {}", city, region))
        }
    }
}

/// Weather conditions and forecast for one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Conditions right now.
    pub current: CurrentConditions,
    /// Place the query resolved to.
    pub location: ResolvedLocation,
    /// Empty for current-only responses.
    #[serde(default)]
    pub forecast: Forecast,
}

impl WeatherRecord {
    /// Forecast day by index; 0 is the provider's current day.
    pub fn forecast_day(&self, index: usize) -> Option<&ForecastDayRecord> {
        self.forecast.forecastday.get(index)
    }
}

/// Condition text and icon URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Human-readable summary, e.g. "Partly cloudy".
    #[serde(default)]
    pub text: String,
    /// Protocol-relative icon URL.
    #[serde(default)]
    pub icon: String,
}

/// Instantaneous conditions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in °F.
    pub temp_f: f64,
    /// Apparent temperature in °F.
    pub feelslike_f: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Precipitation in inches.
    pub precip_in: f64,
    /// Wind speed.
    pub wind_mph: f64,
    /// Compass wind direction, e.g. "SSW".
    #[serde(default)]
    pub wind_dir: String,
    /// Gust speed.
    #[serde(default)]
    pub gust_mph: f64,
    /// Dew point in °F.
    #[serde(default)]
    pub dewpoint_f: f64,
    /// Condition summary.
    #[serde(default)]
    pub condition: Condition,
}

/// Place the provider resolved the query to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedLocation {
    /// Place name.
    pub name: String,
    /// Country name.
    #[serde(default)]
    pub country: String,
    /// State or region.
    #[serde(default)]
    pub region: String,
    /// Wall-clock time at the location, `YYYY-MM-DD H:MM`.
    #[serde(default)]
    pub localtime: String,
    /// IANA zone name, e.g. `America/Chicago`.
    #[serde(default)]
    pub tz_id: String,
    /// Unix timestamp of `localtime`.
    #[serde(default)]
    pub localtime_epoch: Option<i64>,
}

/// Daily forecast container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Days in order, starting with the provider's current day.
    #[serde(default)]
    pub forecastday: Vec<ForecastDayRecord>,
}

/// One forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDayRecord {
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Whole-day aggregate.
    pub day: DayAggregate,
    /// Conditions at the daily high.
    #[serde(default)]
    pub high: Option<Extremity>,
    /// Conditions at the daily low.
    #[serde(default)]
    pub low: Option<Extremity>,
    /// Optional precipitation detail.
    #[serde(flatten)]
    pub precipitation: PrecipitationDetail,
    /// Sunrise and sunset.
    #[serde(default)]
    pub astro: Astro,
    /// Hourly entries in local time order.
    #[serde(default)]
    pub hour: Vec<HourRecord>,
}

/// Whole-day statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAggregate {
    /// Average temperature in °F.
    pub avgtemp_f: f64,
    /// High in °F.
    pub maxtemp_f: f64,
    /// Low in °F.
    #[serde(default)]
    pub mintemp_f: Option<f64>,
    /// Average relative humidity in percent.
    pub avghumidity: f64,
    /// Total precipitation in inches.
    pub totalprecip_in: f64,
    /// Strongest wind.
    pub maxwind_mph: f64,
    /// Condition summary.
    #[serde(default)]
    pub condition: Condition,
}

/// Conditions at the day's high or low point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extremity {
    /// Temperature in °F.
    pub temp_f: f64,
    /// Apparent temperature in °F.
    pub feelslike_f: f64,
    /// Wind speed.
    pub wind_mph: f64,
    /// Compass wind direction.
    #[serde(default)]
    pub wind_dir: String,
    /// Gust speed.
    pub gust_mph: f64,
    /// Dew point in °F.
    pub dewpoint_f: f64,
}

/// Day-level precipitation fields some plans include.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationDetail {
    /// Amount in inches.
    #[serde(default)]
    pub precip_in: Option<f64>,
    /// Amount in millimeters.
    #[serde(default)]
    pub precip_mm: Option<f64>,
    /// Kind, e.g. "rain".
    #[serde(default)]
    pub precip_type: Option<String>,
    /// Chance in percent.
    #[serde(default)]
    pub precip_probability: Option<f64>,
    /// When it is expected.
    #[serde(default)]
    pub time: Option<String>,
}

/// Sunrise and sunset as provider-formatted strings, e.g. `07:02 AM`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Astro {
    /// Local sunrise.
    #[serde(default)]
    pub sunrise: String,
    /// Local sunset.
    #[serde(default)]
    pub sunset: String,
}

/// One hourly forecast entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourRecord {
    /// Condition summary.
    #[serde(default)]
    pub condition: Condition,
    /// Wall-clock time at the location, `YYYY-MM-DD HH:MM`.
    pub time: String,
    /// Unix timestamp of `time`; preferred for comparisons.
    #[serde(default)]
    pub time_epoch: Option<i64>,
    /// Temperature in °F.
    pub temp_f: f64,
    /// Apparent temperature in °F.
    pub feelslike_f: f64,
    /// Wind speed.
    pub wind_mph: f64,
    /// Compass wind direction.
    #[serde(default)]
    pub wind_dir: String,
    /// Wind chill in °F.
    #[serde(default)]
    pub windchill_f: f64,
    /// Gust speed.
    #[serde(default)]
    pub gust_mph: f64,
    /// Dew point in °F.
    #[serde(default)]
    pub dewpoint_f: f64,
    /// Rain expected.
    #[serde(default, deserialize_with = "flag")]
    pub will_it_rain: bool,
    /// Chance of rain in percent.
    #[serde(default)]
    pub chance_of_rain: f64,
    /// Snow expected.
    #[serde(default, deserialize_with = "flag")]
    pub will_it_snow: bool,
    /// Chance of snow in percent.
    #[serde(default)]
    pub chance_of_snow: f64,
    /// Visibility in miles.
    #[serde(default)]
    pub vis_miles: f64,
}

/// Error body returned with non-2xx weather responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ProviderErrorBody {
    pub(crate) error: ProviderError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProviderError {
    #[serde(default)]
    #[allow(dead_code)]
    pub(crate) code: Option<i64>,
    pub(crate) message: String,
}

/// Accept `true`/`false` as well as the provider's `1`/`0`.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    })
}
