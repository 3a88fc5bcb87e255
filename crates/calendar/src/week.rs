//! The academic week value and week-number navigation.

use chrono::{Days, NaiveDate};

use crate::day::DayOfWeek;
use crate::parity::Parity;

/// Number of days a teaching week spans beyond its start date
/// (Monday..Saturday, six calendar days inclusive).
pub const WEEK_SPAN_DAYS: u64 = 5;

/// A resolved academic week.
///
/// Derived on demand from a [`WeekTable`](crate::WeekTable), never stored.
/// The invariants `parity == Parity::of_week(number)` and
/// `end == start + 5 days` hold for every value produced by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcademicWeek {
    /// 1-based week number.
    pub number: u32,
    /// Parity derived from the week number.
    pub parity: Parity,
    /// First day of the week span.
    pub start: NaiveDate,
    /// Last day of the week span (`start + 5 days`).
    pub end: NaiveDate,
}

impl AcademicWeek {
    pub(crate) fn from_number_and_start(number: u32, start: NaiveDate) -> Self {
        AcademicWeek {
            number,
            parity: Parity::of_week(number),
            start,
            end: start + Days::new(WEEK_SPAN_DAYS),
        }
    }

    /// Returns the calendar date of the given teaching day within this week.
    pub fn date_of(&self, day: DayOfWeek) -> NaiveDate {
        date_for_day(self.start, day)
    }
}

/// Returns the calendar date of a teaching day within the week starting at
/// `week_start`.
pub fn date_for_day(week_start: NaiveDate, day: DayOfWeek) -> NaiveDate {
    week_start + Days::new(u64::from(day.index()))
}

/// Steps a week number forward. There is no ceiling: numbers past the last
/// configured week are legal and clamp to the final week's dates when
/// looked up.
pub fn next_week(number: u32) -> u32 {
    number.saturating_add(1)
}

/// Steps a week number backward with a floor of 1.
pub fn prev_week(number: u32) -> u32 {
    if number > 1 {
        number - 1
    } else {
        1
    }
}
