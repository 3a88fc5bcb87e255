//! Error types for the kairos-calendar crate.

/// Error type for all fallible operations in the kairos-calendar crate.
///
/// Week resolution itself never fails (out-of-range inputs degrade to
/// documented defaults); the fallible surface is confined to construction
/// and index validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a week table is constructed from an empty list of
    /// week-start dates.
    #[error("week table is empty: at least one week-start date is required")]
    EmptyTable,

    /// Returned when a day index is outside the teaching week 0..=5
    /// (Monday..Saturday).
    #[error("invalid day index: {index} (must be 0..=5, Monday..Saturday)")]
    InvalidDayIndex {
        /// The invalid day index that was provided.
        index: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_empty_table() {
        let err = CalendarError::EmptyTable;
        assert_eq!(
            err.to_string(),
            "week table is empty: at least one week-start date is required"
        );
    }

    #[test]
    fn display_invalid_day_index() {
        let err = CalendarError::InvalidDayIndex { index: 6 };
        assert_eq!(
            err.to_string(),
            "invalid day index: 6 (must be 0..=5, Monday..Saturday)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_clone_and_eq() {
        let err = CalendarError::InvalidDayIndex { index: 9 };
        assert_eq!(err.clone(), err);
        assert_ne!(err, CalendarError::EmptyTable);
    }
}
