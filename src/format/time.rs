use chrono::{DateTime, Local};

use super::colors::Colors;
use super::value::display_number;

/// Formats a duration in milliseconds.
///
/// With a non-zero `time_reference` that differs from `time`, the value is
/// colored by its share of the reference: below 1/16 plain, then bold, green,
/// yellow and red at 1/16, 1/8, 1/4 and 1/2. Without a reference, durations
/// above one second switch to seconds with two decimals.
#[must_use]
pub fn format_time(
    time: f64,
    time_reference: Option<f64>,
    bold_quantity: bool,
    colors: &Colors,
) -> String {
    if let Some(reference) = time_reference.filter(|r| *r != 0.0 && !r.is_nan()) {
        if time != reference {
            let text = format!("{} ms", display_number(time));
            return if time < reference / 16.0 {
                text
            } else if time < reference / 8.0 {
                colors.bold(&text)
            } else if time < reference / 4.0 {
                colors.green(&text)
            } else if time < reference / 2.0 {
                colors.yellow(&text)
            } else {
                colors.red(&text)
            };
        }
    }

    let (quantity, unit) = if time > 1000.0 {
        (format!("{:.2}", time / 1000.0), " s")
    } else {
        (display_number(time), " ms")
    };
    if bold_quantity {
        format!("{}{unit}", colors.bold(&quantity))
    } else {
        format!("{quantity}{unit}")
    }
}

/// Formats a millisecond timestamp as `YYYY-MM-DD HH:MM:SS` in local time,
/// with the time of day in bold.
#[must_use]
pub fn format_date_time(timestamp_millis: f64, colors: &Colors) -> String {
    let Some(utc) = DateTime::from_timestamp_millis(timestamp_millis as i64) else {
        return display_number(timestamp_millis);
    };
    let local = utc.with_timezone(&Local);
    format!(
        "{} {}",
        local.format("%Y-%m-%d"),
        colors.bold(&local.format("%H:%M:%S").to_string())
    )
}
