//! Provider wall-clock times, zone-aware.
//!
//! The provider reports times as local wall-clock strings plus an IANA zone
//! name. Display formatting uses the wall-clock value as-is; comparisons
//! against the current instant go through the zone.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an IANA zone name such as `America/Chicago`.
pub fn parse_zone(tz_id: &str) -> Option<Tz> {
    tz_id.parse::<Tz>().ok()
}

/// Parse a provider wall-clock time, e.g. `2026-10-18 9:05`.
pub fn parse_local(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), DATE_TIME_FORMAT).ok()
}

/// Parse a provider calendar date, e.g. `2026-10-19`.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// The instant a wall-clock time denotes in `zone`.
///
/// Unknown zones fall back to the host's local zone. Times skipped by a DST
/// transition resolve to `None`; repeated ones take the earlier instant.
pub fn to_instant(local: NaiveDateTime, zone: Option<Tz>) -> Option<DateTime<Utc>> {
    match zone {
        Some(tz) => tz
            .from_local_datetime(&local)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc)),
        None => Local
            .from_local_datetime(&local)
            .earliest()
            .map(|dt| dt.with_timezone(&Utc)),
    }
}

/// Wall-clock time of a Unix timestamp in `zone`.
///
/// Unknown zones fall back to the host's local zone.
pub fn local_from_epoch(epoch: i64, zone: Option<Tz>) -> Option<NaiveDateTime> {
    let instant = Utc.timestamp_opt(epoch, 0).single()?;
    Some(match zone {
        Some(tz) => instant.with_timezone(&tz).naive_local(),
        None => instant.with_timezone(&Local).naive_local(),
    })
}

/// `9:05 AM`
pub fn format_clock(local: NaiveDateTime) -> String {
    local.format("%-I:%M %p").to_string()
}

/// `Sunday, October 18, 2026`
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
