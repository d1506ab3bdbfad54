use crate::config::Settings;
use crate::core::row::Row;
use crate::core::selector::select_events;
use crate::core::sort::sort_rows;
use crate::errors::AppResult;
use crate::export::export_rows;
use crate::ics::{CalendarEvent, read_calendar_file};
use crate::ui::messages::{info, success, warning};

/// Logica di alto livello: calendar → filter → rows → sort → write.
pub struct ConvertLogic;

impl ConvertLogic {
    /// Runs one conversion. Any error aborts the run; the output file is
    /// only created once every row has been built.
    pub fn run(settings: &Settings) -> AppResult<usize> {
        if !settings.quiet {
            info(format!(
                "Reading calendar: {}",
                settings.ics_path.display()
            ));
        }

        let events = read_calendar_file(&settings.ics_path)?;
        let rows = build_rows(&events, &settings.filter, &settings.name)?;

        if !settings.quiet {
            info(format!(
                "Selected {} of {} events",
                rows.len(),
                events.len()
            ));

            for row in rows.iter().filter(|r| r.is_negative()) {
                warning(format!(
                    "Event on {} at {} ends before it starts ({})",
                    row.date, row.start_time, row.duration
                ));
            }
        }

        export_rows(&settings.sink, &rows, settings.delimiter, settings.header)?;

        if !settings.quiet {
            success(format!(
                "CSV export completed: {} ({} rows)",
                settings.sink,
                rows.len()
            ));
        }

        Ok(rows.len())
    }
}

/// Select, build and sort the rows for `events`.
pub fn build_rows(events: &[CalendarEvent], filter: &str, name: &str) -> AppResult<Vec<Row>> {
    let mut rows = select_events(events, filter)
        .into_iter()
        .map(|ev| Row::from_event(ev, name))
        .collect::<AppResult<Vec<_>>>()?;

    sort_rows(&mut rows);
    Ok(rows)
}
