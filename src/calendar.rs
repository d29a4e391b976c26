use crate::models::{DayCell, Entry};
use chrono::{Datelike, Duration, NaiveDate};

/// 6 rows of 7 columns, the fixed month-view grid.
pub const MONTH_GRID_CELLS: usize = 42;

/// Buckets entries into a 42-cell month grid for `year`/`month` (1-12).
/// The grid is Sunday-led: leading cells come from the previous month and
/// trailing cells from the next, both without entries. Returns an empty
/// vector when `year`/`month` do not name a real month.
pub fn build_month_grid(
    entries: &[Entry],
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Vec<DayCell> {
    let Some(first_of_month) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let leading = first_of_month.weekday().num_days_from_sunday() as i64;
    let grid_start = first_of_month - Duration::days(leading);

    (0..MONTH_GRID_CELLS as i64)
        .map(|offset| {
            let date = grid_start + Duration::days(offset);
            let in_current_month = date.year() == year && date.month() == month;
            DayCell {
                date: date.to_string(),
                day: date.day(),
                in_current_month,
                is_today: date == today,
                entries: if in_current_month {
                    entries_on(entries, date)
                } else {
                    Vec::new()
                },
            }
        })
        .collect()
}

/// Seven cells for the week containing `anchor`, Sunday through Saturday.
/// The week view is Sunday-anchored while the weekly hour buckets start on
/// Monday; both behaviors are carried over from the program as observed.
pub fn build_week_grid(entries: &[Entry], anchor: NaiveDate, today: NaiveDate) -> Vec<DayCell> {
    let start = anchor - Duration::days(anchor.weekday().num_days_from_sunday() as i64);
    (0..7)
        .map(|offset| {
            let date = start + Duration::days(offset);
            DayCell {
                date: date.to_string(),
                day: date.day(),
                in_current_month: true,
                is_today: date == today,
                entries: entries_on(entries, date),
            }
        })
        .collect()
}

/// All entries falling on `date`, in input order. Entries whose stored date
/// does not parse never land in any cell.
fn entries_on(entries: &[Entry], date: NaiveDate) -> Vec<Entry> {
    entries
        .iter()
        .filter(|entry| entry.day() == Some(date))
        .cloned()
        .collect()
}
