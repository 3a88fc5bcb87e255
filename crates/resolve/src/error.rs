//! Error types for the kairos-resolve crate.

/// Error type for all fallible operations in the kairos-resolve crate.
///
/// Resolution itself is infallible; only the construction of a validated
/// slot sequence can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotsError {
    /// Returned when a slot sequence is constructed from an empty list.
    #[error("slot sequence is empty: at least one time slot is required")]
    Empty,

    /// Returned when two slots share the same ordinal number.
    #[error("duplicate slot number: {number}")]
    DuplicateNumber {
        /// The ordinal that appears more than once.
        number: u8,
    },

    /// Returned when a slot ends at or before it starts.
    #[error("slot {number} has an empty span: start {start} >= end {end}")]
    EmptySpan {
        /// The offending slot's ordinal.
        number: u8,
        /// Start clock time.
        start: chrono::NaiveTime,
        /// End clock time.
        end: chrono::NaiveTime,
    },
}
