use crate::ics::CalendarEvent;

/// Keep the events whose summary equals `filter` exactly.
///
/// An empty filter keeps everything. No trimming, no case folding,
/// input order is preserved.
pub fn select_events<'a>(events: &'a [CalendarEvent], filter: &str) -> Vec<&'a CalendarEvent> {
    events
        .iter()
        .filter(|ev| filter.is_empty() || ev.summary == filter)
        .collect()
}
