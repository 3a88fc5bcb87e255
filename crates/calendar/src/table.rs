//! The week table: the externally configured, ordered list of academic
//! week-start dates, and every resolution defined over it.

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::error::CalendarError;
use crate::parity::Parity;
use crate::week::{AcademicWeek, WEEK_SPAN_DAYS};

/// Ordered table of academic week-start dates.
///
/// Entry `i` is the first day of week `i + 1` (week numbers are 1-based).
/// Each week spans six calendar days, start and end inclusive. The table
/// is supplied by configuration and is never mutated; all lookups are
/// infallible and degrade to documented defaults instead of erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekTable {
    starts: Vec<NaiveDate>,
}

impl WeekTable {
    /// Creates a week table from an ordered list of week-start dates.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::EmptyTable`] if `starts` is empty. This is
    /// the only fallible operation on the table; every lookup afterwards
    /// has a defined result for any input.
    pub fn new(starts: Vec<NaiveDate>) -> Result<Self, CalendarError> {
        if starts.is_empty() {
            return Err(CalendarError::EmptyTable);
        }
        Ok(WeekTable { starts })
    }

    /// Number of configured weeks.
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Always `false`: construction rejects empty tables.
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Resolves a calendar date to its academic week.
    ///
    /// Scans for the unique entry whose six-day span (start and end both
    /// inclusive) contains `today`. Dates outside every configured span
    /// (before the academic year, after it, or on the gap day between two
    /// spans) fall back to week 1 / odd, carrying week 1's configured
    /// dates. The fallback is a deliberate policy, not an error path.
    pub fn resolve(&self, today: NaiveDate) -> AcademicWeek {
        for (i, &start) in self.starts.iter().enumerate() {
            let end = start + Days::new(WEEK_SPAN_DAYS);
            if start <= today && today <= end {
                return AcademicWeek::from_number_and_start(i as u32 + 1, start);
            }
        }
        debug!(%today, "date outside configured weeks, falling back to week 1");
        AcademicWeek::from_number_and_start(1, self.starts[0])
    }

    /// Returns the academic week with the given 1-based number.
    ///
    /// The table index is clamped to `[1, len]`, so numbers beyond the
    /// last configured week repeat the final week's dates while keeping
    /// the requested number and its parity. Zero clamps to week 1.
    pub fn week(&self, number: u32) -> AcademicWeek {
        let number = number.max(1);
        let index = (number as usize - 1).min(self.starts.len() - 1);
        let start = self.starts[index];
        AcademicWeek {
            number,
            parity: Parity::of_week(number),
            start,
            end: start + Days::new(WEEK_SPAN_DAYS),
        }
    }

    /// Returns the current academic week.
    ///
    /// When `pinned` is set the week number is fixed by configuration
    /// (administrator override): the result is [`week`](Self::week) of
    /// that number and `today` is ignored. Otherwise the week is derived
    /// from `today` via [`resolve`](Self::resolve).
    pub fn current(&self, today: NaiveDate, pinned: Option<u32>) -> AcademicWeek {
        match pinned {
            Some(number) => self.week(number),
            None => self.resolve(today),
        }
    }

    /// Returns `true` if `date` falls within the six-day span starting at
    /// `week_start`.
    pub fn contains(week_start: NaiveDate, date: NaiveDate) -> bool {
        week_start <= date && date <= week_start + Days::new(WEEK_SPAN_DAYS)
    }
}
