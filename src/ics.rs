//! Calendar reading using the icalendar crate's parser.
//!
//! The rest of the crate only sees [`CalendarEvent`]: the summary plus the raw
//! DTSTART/DTEND values of every VEVENT, in document order.

use crate::errors::{AppError, AppResult};
use icalendar::parser::{read_calendar, unfold};
use std::fs;
use std::path::Path;

/// One VEVENT, reduced to the fields the converter needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub summary: String,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl CalendarEvent {
    pub fn new(summary: &str, start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            summary: summary.to_string(),
            start: start.map(str::to_string),
            end: end.map(str::to_string),
        }
    }
}

/// Legge e interpreta il file .ics indicato.
pub fn read_calendar_file(path: &Path) -> AppResult<Vec<CalendarEvent>> {
    let content = fs::read_to_string(path).map_err(|source| AppError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;

    parse_calendar(&content)
}

/// Parse ICS content into the list of its events.
pub fn parse_calendar(content: &str) -> AppResult<Vec<CalendarEvent>> {
    let unfolded = unfold(content);

    if !unfolded
        .lines()
        .any(|l| l.trim().eq_ignore_ascii_case("BEGIN:VCALENDAR"))
    {
        return Err(AppError::CalendarParse(
            "missing BEGIN:VCALENDAR".to_string(),
        ));
    }

    let calendar = read_calendar(&unfolded).map_err(AppError::CalendarParse)?;

    let events = calendar
        .components
        .iter()
        .filter(|c| c.name == "VEVENT")
        .map(|vevent| CalendarEvent {
            summary: vevent
                .find_prop("SUMMARY")
                .map(|p| unescape_text(p.val.as_ref()))
                .unwrap_or_default(),
            start: vevent.find_prop("DTSTART").map(|p| p.val.to_string()),
            end: vevent.find_prop("DTEND").map(|p| p.val.to_string()),
        })
        .collect();

    Ok(events)
}

/// Reverse RFC 5545 TEXT escaping: `\,` `\;` `\\` and `\n`/`\N`.
/// An unknown escape keeps its backslash.
fn unescape_text(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        match chars.peek() {
            Some(&(e @ (',' | ';' | '\\'))) => {
                result.push(e);
                chars.next();
            }
            Some('n') | Some('N') => {
                result.push('\n');
                chars.next();
            }
            _ => result.push(c),
        }
    }

    result
}
