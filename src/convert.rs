use crate::error::{ReportError, Result};
use chrono::{DateTime, NaiveDate, NaiveTime};
use std::fmt::Display;

pub const DEGREE_SYMBOL: &str = "°C";

const DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%A %d %B %Y";

/// Converts a Fahrenheit temperature to Celsius, rounded to one decimal place.
///
/// Halves round to even, so an average of `43.25` gives `6.2`, not `6.3`.
///
/// # Arguments
/// * `temp_f` - Temperature in degrees Fahrenheit
///
/// # Returns
/// The temperature in degrees Celsius, e.g. `51.0` becomes `10.6`.
pub fn convert_f_to_c(temp_f: f64) -> f64 {
    let celsius = (temp_f - 32.0) * 5.0 / 9.0;
    (celsius * 10.0).round_ties_even() / 10.0
}

/// Coerces a numeric-looking string (e.g. `"51"`, `" 48.5 "`) into a temperature value.
///
/// # Errors
/// Returns `ReportError::InvalidInput` if the text is not a finite number.
pub fn parse_temperature(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite())
        .ok_or_else(|| ReportError::InvalidInput(raw.to_string()))
}

/// Appends the degree-Celsius suffix. No unit conversion is performed.
pub fn format_temperature(temp: impl Display) -> String {
    format!("{temp}{DEGREE_SYMBOL}")
}

/// Converts an ISO-8601 date or date-time into a human readable form such as
/// `Tuesday 06 July 2021`.
///
/// Accepted forms are `YYYY-MM-DD`, optionally followed by `T` or a space and a time of
/// `HH`, `HH:MM` or `HH:MM:SS[.fff]`, optionally followed by `Z` or an offset such as
/// `+08:00` / `+0800`. Offsets are kept as written: `2021-07-06T23:00:00-05:00` is
/// still the 6th. Surrounding whitespace is not accepted.
///
/// # Errors
/// Returns `ReportError::InvalidDate` when the input is not one of those forms.
pub fn convert_date(iso_string: &str) -> Result<String> {
    let date = parse_iso_date(iso_string)
        .ok_or_else(|| ReportError::InvalidDate(iso_string.to_string()))?;
    Ok(date.format(DISPLAY_FORMAT).to_string())
}

fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(s.get(..10)?, DATE_FORMAT).ok()?;
    let rest = &s[10..];
    if rest.is_empty() {
        return Some(date);
    }
    let time = rest.strip_prefix(['T', ' '])?;
    is_valid_time(time).then_some(date)
}

fn is_valid_time(time: &str) -> bool {
    let (clock, offset) = match time.strip_suffix('Z') {
        Some(clock) => (clock, None),
        None => match time.find(['+', '-']) {
            Some(at) => (&time[..at], Some(&time[at..])),
            None => (time, None),
        },
    };

    let clock_ok = if clock.len() == 2 {
        clock.bytes().all(|b| b.is_ascii_digit()) && clock < "24"
    } else {
        ["%H:%M:%S%.f", "%H:%M"]
            .iter()
            .any(|fmt| NaiveTime::parse_from_str(clock, fmt).is_ok())
    };
    clock_ok && offset.is_none_or(is_valid_offset)
}

fn is_valid_offset(offset: &str) -> bool {
    let stamp = format!("2000-01-01T00:00{offset}");
    ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%dT%H:%M%z"]
        .iter()
        .any(|fmt| DateTime::parse_from_str(&stamp, fmt).is_ok())
}
