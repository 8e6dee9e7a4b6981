//! Shared formatting utilities for UI components.

/// Format a measurement with at most one decimal place.
///
/// Whole numbers drop the fraction (`72`, not `72.0`).
pub fn format_value(val: f64) -> String {
    if !val.is_finite() {
        return "--".to_string();
    }
    let rounded = (val * 10.0).round() / 10.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

/// `58.3° F`
pub fn format_temp(val: f64) -> String {
    format!("{}° F", format_value(val))
}

/// `64%`
pub fn format_percent(val: f64) -> String {
    format!("{}%", format_value(val))
}

/// `8.1 mph`, with the direction appended when known.
pub fn format_wind(mph: f64, dir: &str) -> String {
    if dir.is_empty() {
        format!("{} mph", format_value(mph))
    } else {
        format!("{} mph {}", format_value(mph), dir)
    }
}
