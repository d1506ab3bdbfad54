use super::row::Row;

/// Orders rows by date, then start time.
///
/// Both keys are zero-padded fixed-width strings, so comparing them as text
/// is chronological. `sort_by` is stable: rows with the same date and start
/// time keep their calendar order.
pub fn sort_rows(rows: &mut [Row]) {
    rows.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.start_time.cmp(&b.start_time))
    });
}
