//! Error types for the kairos-topology crate.

/// Error type for all fallible operations in the kairos-topology crate.
///
/// Enumeration never fails (unknown keys take defaults); the fallible
/// surface is group-key parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// Returned when a composite group key does not have the
    /// `faculty-course-stream-group` shape with numeric trailing fields.
    #[error("malformed group id: {input:?} (expected faculty-course-stream-group)")]
    MalformedGroupId {
        /// The string that failed to parse.
        input: String,
    },
}
