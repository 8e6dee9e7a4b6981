//! Shared payloads for integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};

/// A geolocation response for Springfield, Illinois.
pub fn springfield() -> Value {
    json!({
        "status": "success",
        "country": "United States",
        "countryCode": "US",
        "regionName": "Illinois",
        "city": "Springfield",
        "zip": "62701",
        "lat": 39.7817,
        "lon": -89.6501,
        "timezone": "America/Chicago"
    })
}

fn hour(time: &str, temp_f: f64) -> Value {
    json!({
        "time": time,
        "temp_f": temp_f,
        "feelslike_f": temp_f - 1.5,
        "wind_mph": 5.6,
        "wind_dir": "S",
        "windchill_f": temp_f - 2.0,
        "gust_mph": 9.4,
        "dewpoint_f": 41.0,
        "will_it_rain": 0,
        "chance_of_rain": 10,
        "will_it_snow": 0,
        "chance_of_snow": 0,
        "vis_miles": 6.0,
        "condition": { "text": "Sunny", "icon": "//cdn.weatherapi.com/weather/64x64/day/113.png" }
    })
}

fn day(date: &str, avg: f64) -> Value {
    json!({
        "date": date,
        "day": {
            "avgtemp_f": avg,
            "maxtemp_f": avg + 8.0,
            "mintemp_f": avg - 7.0,
            "avghumidity": 60,
            "totalprecip_in": 0.0,
            "maxwind_mph": 11.0,
            "condition": { "text": "Sunny", "icon": "//cdn.weatherapi.com/weather/64x64/day/113.png" }
        },
        "astro": { "sunrise": "07:09 AM", "sunset": "06:21 PM" },
        "hour": [
            hour(&format!("{} 12:00", date), avg),
            hour(&format!("{} 18:00", date), avg - 3.0)
        ]
    })
}

/// A three-day forecast response for Springfield, Illinois.
pub fn forecast() -> Value {
    json!({
        "location": {
            "name": "Springfield",
            "region": "Illinois",
            "country": "USA",
            "tz_id": "America/Chicago",
            "localtime_epoch": 1792332300,
            "localtime": "2026-10-18 9:05"
        },
        "current": {
            "temp_f": 58.3,
            "feelslike_f": 56.0,
            "humidity": 64,
            "precip_in": 0.0,
            "wind_mph": 8.1,
            "wind_dir": "SSW",
            "gust_mph": 12.4,
            "dewpoint_f": 46.2,
            "condition": { "text": "Partly cloudy", "icon": "//cdn.weatherapi.com/weather/64x64/day/116.png" }
        },
        "forecast": {
            "forecastday": [
                day("2026-10-18", 55.0),
                day("2026-10-19", 61.0),
                day("2026-10-20", 49.0)
            ]
        }
    })
}
