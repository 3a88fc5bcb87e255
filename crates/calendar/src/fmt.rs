//! Display helpers for week date ranges.

use chrono::{Datelike, NaiveDate};

/// Formats a week span as `"dd.mm - dd.mm"`, the short form used in week
/// headers.
pub fn format_week_range(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{:02}.{:02} - {:02}.{:02}",
        start.day(),
        start.month(),
        end.day(),
        end.month()
    )
}
