use crate::errors::{AppError, AppResult};
use crate::ics::CalendarEvent;
use crate::utils::time::{format_clock, format_date, format_duration, parse_timestamp};

/// One output record. Built once per selected event, never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub date: String,       // YYYY/MM/DD, from DTSTART
    pub start_time: String, // HH:MM
    pub end_time: String,   // HH:MM
    pub duration: String,   // HH:MM, DTEND - DTSTART
}

impl Row {
    /// Builds the row for `event`, failing when DTSTART or DTEND is
    /// absent or not a compact timestamp.
    pub fn from_event(event: &CalendarEvent, name: &str) -> AppResult<Self> {
        let start = parse_timestamp(required(&event.start, "DTSTART", event)?)?;
        let end = parse_timestamp(required(&event.end, "DTEND", event)?)?;

        Ok(Self {
            name: name.to_string(),
            date: format_date(&start),
            start_time: format_clock(&start),
            end_time: format_clock(&end),
            duration: format_duration(end - start),
        })
    }

    /// True when the event ends before it starts.
    pub fn is_negative(&self) -> bool {
        self.duration.starts_with('-')
    }

    /// Fields in output order.
    pub fn fields(&self) -> [&str; 5] {
        [
            self.name.as_str(),
            self.date.as_str(),
            self.start_time.as_str(),
            self.end_time.as_str(),
            self.duration.as_str(),
        ]
    }
}

/// Header line, only written with `--header`.
pub fn get_headers() -> [&'static str; 5] {
    ["name", "date", "start", "end", "duration"]
}

fn required<'a>(
    value: &'a Option<String>,
    property: &'static str,
    event: &CalendarEvent,
) -> AppResult<&'a str> {
    value.as_deref().ok_or_else(|| AppError::MissingTimestamp {
        property,
        summary: event.summary.clone(),
    })
}
