use anyhow::{anyhow, Result};
use chrono::{Duration, Local, NaiveDate, NaiveTime};

pub const DATE_FORMAT: &str = "%d-%m-%Y";
pub const TIME_FORMAT: &str = "%H:%M";

/// The user's current calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a strict `dd-mm-yyyy` date.
///
/// chrono accepts unpadded numbers, so the shape is checked first to keep
/// `1-4-2021` out.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if !has_shape(input, "dd-dd-dddd") {
        return Err(anyhow!("Date '{}' is not in dd-mm-yyyy form", input));
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|e| anyhow!("Date '{}' does not exist: {}", input, e))
}

/// Parses a strict 24-hour `HH:MM` time.
pub fn parse_time(input: &str) -> Result<NaiveTime> {
    let input = input.trim();
    if !has_shape(input, "dd:dd") {
        return Err(anyhow!("Time '{}' is not in HH:MM form", input));
    }
    NaiveTime::parse_from_str(input, TIME_FORMAT)
        .map_err(|e| anyhow!("Time '{}' does not exist: {}", input, e))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Last day of an inclusive window of `days` days starting at `start`.
/// Saturates instead of overflowing for absurdly large windows.
pub fn window_end(start: NaiveDate, days: u32) -> NaiveDate {
    start
        .checked_add_signed(Duration::days(days as i64))
        .unwrap_or(NaiveDate::MAX)
}

/// Whole days from `from` to `to`; negative when `to` is in the past.
pub fn days_until(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

// 'd' matches an ASCII digit, anything else must match literally.
fn has_shape(input: &str, shape: &str) -> bool {
    input.len() == shape.len()
        && input.chars().zip(shape.chars()).all(|(c, s)| match s {
            'd' => c.is_ascii_digit(),
            _ => c == s,
        })
}
