//! Teaching days: the six-day Monday..Saturday week.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;

/// A teaching day of the week.
///
/// The academic week runs Monday through Saturday; Sunday is never a
/// teaching day and has no representation here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// All teaching days in week order, Monday first.
pub const TEACHING_DAYS: [DayOfWeek; 6] = [
    DayOfWeek::Monday,
    DayOfWeek::Tuesday,
    DayOfWeek::Wednesday,
    DayOfWeek::Thursday,
    DayOfWeek::Friday,
    DayOfWeek::Saturday,
];

impl DayOfWeek {
    /// Returns the 0-based index within the teaching week
    /// (Monday = 0, ..., Saturday = 5).
    pub fn index(self) -> u8 {
        match self {
            DayOfWeek::Monday => 0,
            DayOfWeek::Tuesday => 1,
            DayOfWeek::Wednesday => 2,
            DayOfWeek::Thursday => 3,
            DayOfWeek::Friday => 4,
            DayOfWeek::Saturday => 5,
        }
    }

    /// Creates a `DayOfWeek` from a 0-based index.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDayIndex`] if `index` is not in
    /// 0..=5.
    pub fn from_index(index: u8) -> Result<Self, CalendarError> {
        match index {
            0 => Ok(DayOfWeek::Monday),
            1 => Ok(DayOfWeek::Tuesday),
            2 => Ok(DayOfWeek::Wednesday),
            3 => Ok(DayOfWeek::Thursday),
            4 => Ok(DayOfWeek::Friday),
            5 => Ok(DayOfWeek::Saturday),
            _ => Err(CalendarError::InvalidDayIndex { index }),
        }
    }

    /// Returns the teaching day a calendar date falls on, or `None` for
    /// Sunday.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        match date.weekday().num_days_from_monday() {
            6 => None,
            n => Some(Self::from_index(n as u8).expect("weekday index is 0..=5")),
        }
    }

    /// Returns the English day name.
    pub fn name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for index in 0..=5_u8 {
            let day = DayOfWeek::from_index(index).unwrap();
            assert_eq!(day.index(), index);
        }
    }

    #[test]
    fn from_index_out_of_range() {
        assert_eq!(
            DayOfWeek::from_index(6).unwrap_err(),
            CalendarError::InvalidDayIndex { index: 6 }
        );
        assert_eq!(
            DayOfWeek::from_index(255).unwrap_err(),
            CalendarError::InvalidDayIndex { index: 255 }
        );
    }

    #[test]
    fn from_date_monday() {
        // 2024-09-02 was a Monday.
        let date = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
        assert_eq!(DayOfWeek::from_date(date), Some(DayOfWeek::Monday));
    }

    #[test]
    fn from_date_saturday() {
        // 2024-09-07 was a Saturday.
        let date = NaiveDate::from_ymd_opt(2024, 9, 7).unwrap();
        assert_eq!(DayOfWeek::from_date(date), Some(DayOfWeek::Saturday));
    }

    #[test]
    fn from_date_sunday_is_none() {
        // 2024-09-01 was a Sunday.
        let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        assert_eq!(DayOfWeek::from_date(date), None);
    }

    #[test]
    fn teaching_days_ordered() {
        for (i, day) in TEACHING_DAYS.iter().enumerate() {
            assert_eq!(day.index() as usize, i);
        }
    }

    #[test]
    fn names() {
        assert_eq!(DayOfWeek::Monday.name(), "Monday");
        assert_eq!(DayOfWeek::Saturday.name(), "Saturday");
    }
}
