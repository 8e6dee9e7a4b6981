//! View model for the weather display.
//!
//! Everything here is a pure function of the controller state and the
//! current instant, so rendering the same state twice gives the same output.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

use super::time::{
    format_clock, format_long_date, local_from_epoch, parse_date, parse_local, parse_zone,
    to_instant,
};
use super::{DisplayController, ForecastDay};
use crate::api::schema::{ForecastDayRecord, HourRecord, WeatherRecord};
use crate::ui::formatters::{format_percent, format_temp, format_value, format_wind};

/// Placeholder for values the provider did not supply.
pub const NOT_AVAILABLE: &str = "not available";

/// Countries whose name is not repeated under the place heading.
const DOMESTIC_COUNTRIES: [&str; 2] = ["United States of America", "USA"];

/// Labeled value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    /// Label, e.g. "Temp".
    pub label: &'static str,
    /// Formatted value, e.g. "58.3° F".
    pub value: String,
}

impl Stat {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Location heading and local clock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// "Springfield, Illinois"
    pub place: String,
    /// Shown only for non-U.S. locations.
    pub country: Option<String>,
    /// Local time of day.
    pub time: String,
    /// Local long date.
    pub date: String,
}

/// One hourly entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourView {
    /// Local time of day.
    pub time: String,
    /// Condition text.
    pub condition: String,
    /// Hour statistics.
    pub stats: Vec<Stat>,
}

/// One forecast day panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView {
    /// Which day this is.
    pub day: ForecastDay,
    /// Panel heading.
    pub title: &'static str,
    /// Long date, for days after today.
    pub date: Option<String>,
    /// Condition text.
    pub condition: String,
    /// Day statistics.
    pub stats: Vec<Stat>,
    /// Whether the hourly panel is open.
    pub hourly_expanded: bool,
    /// Upcoming hours; empty unless expanded.
    pub hours: Vec<HourView>,
}

/// Everything the weather panel shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayView {
    /// Location heading.
    pub header: HeaderView,
    /// Day panels; empty until a record is available.
    pub days: Vec<DayView>,
}

impl DisplayView {
    /// Build the view, or `None` when there is no query to show.
    pub fn build(controller: &DisplayController, now: DateTime<Utc>) -> Option<Self> {
        if controller.query().is_empty() {
            return None;
        }

        let record = controller.record();
        let header = build_header(controller.query(), record);
        let days = match record {
            Some(record) => {
                let zone = parse_zone(&record.location.tz_id);
                ForecastDay::ALL
                    .iter()
                    .map(|&day| {
                        let expanded = controller.hourly().is_expanded(day);
                        build_day(record, day, expanded, zone, now)
                    })
                    .collect()
            },
            None => Vec::new(),
        };

        Some(Self { header, days })
    }
}

/// The country line, suppressed for U.S. locations and blank values.
pub fn country_line(country: &str) -> Option<String> {
    let country = country.trim();
    if country.is_empty() || DOMESTIC_COUNTRIES.contains(&country) {
        None
    } else {
        Some(country.to_string())
    }
}

/// Hours of `day` at or after `now`, in provider order.
pub fn upcoming_hours<'a>(
    day: &'a ForecastDayRecord,
    zone: Option<Tz>,
    now: DateTime<Utc>,
) -> Vec<&'a HourRecord> {
    day.hour
        .iter()
        .filter(|hour| hour_instant(hour, zone).is_some_and(|t| t >= now))
        .collect()
}

fn hour_instant(hour: &HourRecord, zone: Option<Tz>) -> Option<DateTime<Utc>> {
    if let Some(epoch) = hour.time_epoch {
        return Utc.timestamp_opt(epoch, 0).single();
    }
    parse_local(&hour.time).and_then(|local| to_instant(local, zone))
}

fn build_header(query: &str, record: Option<&WeatherRecord>) -> HeaderView {
    let Some(record) = record else {
        return HeaderView {
            place: query.to_string(),
            country: None,
            time: "Time not available".to_string(),
            date: "Date not available".to_string(),
        };
    };

    let location = &record.location;
    let place = if location.region.is_empty() {
        location.name.clone()
    } else {
        format!("{}, {}", location.name, location.region)
    };
    let local = parse_local(&location.localtime).or_else(|| {
        location
            .localtime_epoch
            .and_then(|epoch| local_from_epoch(epoch, parse_zone(&location.tz_id)))
    });

    HeaderView {
        place,
        country: country_line(&location.country),
        time: local
            .map(format_clock)
            .unwrap_or_else(|| "Time not available".to_string()),
        date: local
            .map(|l| format_long_date(l.date()))
            .unwrap_or_else(|| "Date not available".to_string()),
    }
}

fn build_day(
    record: &WeatherRecord,
    day: ForecastDay,
    expanded: bool,
    zone: Option<Tz>,
    now: DateTime<Utc>,
) -> DayView {
    let forecast = record.forecast_day(day.index());

    let (condition, mut stats) = match day {
        ForecastDay::Today => {
            let current = &record.current;
            (
                current.condition.text.clone(),
                vec![
                    Stat::new("Temp", format_temp(current.temp_f)),
                    Stat::new("Feels Like", format_temp(current.feelslike_f)),
                    Stat::new("Humidity", format_percent(current.humidity)),
                    Stat::new("Precip", format!("{} in.", format_value(current.precip_in))),
                    Stat::new("Wind", format_wind(current.wind_mph, &current.wind_dir)),
                    Stat::new("Gusts", format!("{} mph", format_value(current.gust_mph))),
                    Stat::new("Dew Point", format_temp(current.dewpoint_f)),
                ],
            )
        },
        ForecastDay::Tomorrow | ForecastDay::DayAfter => match forecast {
            Some(f) => {
                let agg = &f.day;
                let mut stats = vec![
                    Stat::new("Avg Temp", format_temp(agg.avgtemp_f)),
                    Stat::new("Max Temp", format_temp(agg.maxtemp_f)),
                ];
                if let Some(min) = agg.mintemp_f {
                    stats.push(Stat::new("Min Temp", format_temp(min)));
                }
                stats.extend([
                    Stat::new("Humidity", format_percent(agg.avghumidity)),
                    Stat::new("Precip", format!("{} in.", format_value(agg.totalprecip_in))),
                    Stat::new("Max Wind", format!("{} mph", format_value(agg.maxwind_mph))),
                ]);
                (agg.condition.text.clone(), stats)
            },
            None => (NOT_AVAILABLE.to_string(), Vec::new()),
        },
    };

    let astro = forecast.map(|f| &f.astro);
    stats.push(Stat::new("Sunrise", astro_value(astro.map(|a| a.sunrise.as_str()))));
    stats.push(Stat::new("Sunset", astro_value(astro.map(|a| a.sunset.as_str()))));

    let date = match day {
        ForecastDay::Today => None,
        _ => Some(
            forecast
                .and_then(|f| parse_date(&f.date))
                .map(format_long_date)
                .unwrap_or_else(|| "Date not available".to_string()),
        ),
    };

    let hours = match forecast {
        Some(f) if expanded => upcoming_hours(f, zone, now)
            .into_iter()
            .map(build_hour)
            .collect(),
        _ => Vec::new(),
    };

    DayView {
        day,
        title: day.title(),
        date,
        condition,
        stats,
        hourly_expanded: expanded,
        hours,
    }
}

fn astro_value(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn build_hour(hour: &HourRecord) -> HourView {
    HourView {
        time: parse_local(&hour.time)
            .map(format_clock)
            .unwrap_or_else(|| hour.time.clone()),
        condition: hour.condition.text.clone(),
        stats: vec![
            Stat::new("Temp", format_temp(hour.temp_f)),
            Stat::new("Feels Like", format_temp(hour.feelslike_f)),
            Stat::new("Wind", format_wind(hour.wind_mph, &hour.wind_dir)),
            Stat::new("Gusts", format!("{} mph", format_value(hour.gust_mph))),
            Stat::new("Wind Chill", format_temp(hour.windchill_f)),
            Stat::new("Dew Point", format_temp(hour.dewpoint_f)),
            Stat::new("Chance of Rain", format!("{} %", format_value(hour.chance_of_rain))),
            Stat::new("Chance of Snow", format!("{} %", format_value(hour.chance_of_snow))),
            Stat::new("Visibility", format!("{} miles", format_value(hour.vis_miles))),
        ],
    }
}
