//! Time utilities: parsing compact iCalendar timestamps, formatting dates,
//! clock times and durations for the output rows.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, TimeDelta};

/// Layout of a floating DATE-TIME value, e.g. `20240304T091500`.
pub const COMPACT_TIMESTAMP: &str = "%Y%m%dT%H%M%S";

pub const DATE_FORMAT: &str = "%Y/%m/%d";
pub const CLOCK_FORMAT: &str = "%H:%M";

/// Parse a compact timestamp (`YYYYMMDDThhmmss`) as written, without any
/// timezone conversion.
pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, COMPACT_TIMESTAMP).map_err(|e| AppError::InvalidTimestamp {
        value: s.to_string(),
        reason: e.to_string(),
    })
}

pub fn format_date(dt: &NaiveDateTime) -> String {
    dt.format(DATE_FORMAT).to_string()
}

pub fn format_clock(dt: &NaiveDateTime) -> String {
    dt.format(CLOCK_FORMAT).to_string()
}

/// `HH:MM` for a span: whole hours, then the remaining minutes.
/// Seconds are truncated; hours are not wrapped at 24.
/// A negative span keeps its sign in front (`-01:15`).
pub fn format_duration(d: TimeDelta) -> String {
    format_minutes(d.num_minutes())
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
