//! The composite group key.
//!
//! `GroupId` is the system's only foreign-key mechanism: schedule and
//! replacement entries reference groups by this key, and the UI selection
//! state reconstructs it from its four components. Its rendered form
//! `{faculty}-{course}-{stream}-{group}` is therefore a stability
//! invariant: render and parse must round-trip exactly.

use std::fmt;
use std::str::FromStr;

use crate::error::TopologyError;

/// Identifies one student group: faculty, course year, stream, group
/// number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupId {
    faculty: String,
    course: u8,
    stream: u8,
    group: u8,
}

impl GroupId {
    /// Builds a group key from its components.
    pub fn new(faculty: impl Into<String>, course: u8, stream: u8, group: u8) -> Self {
        GroupId {
            faculty: faculty.into(),
            course,
            stream,
            group,
        }
    }

    /// Faculty identifier (opaque, may itself contain `-`).
    pub fn faculty(&self) -> &str {
        &self.faculty
    }

    /// Course year.
    pub fn course(&self) -> u8 {
        self.course
    }

    /// Stream number within the course.
    pub fn stream(&self) -> u8 {
        self.stream
    }

    /// Group number within the stream.
    pub fn group(&self) -> u8 {
        self.group
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.faculty, self.course, self.stream, self.group
        )
    }
}

impl FromStr for GroupId {
    type Err = TopologyError;

    /// Parses the rendered `faculty-course-stream-group` form.
    ///
    /// The three trailing fields are numeric; everything before them is
    /// the faculty id, so faculty ids containing `-` survive the round
    /// trip.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TopologyError::MalformedGroupId {
            input: s.to_string(),
        };

        let mut tail = s.rsplitn(4, '-');
        let group = tail.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
        let stream = tail.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
        let course = tail.next().and_then(|p| p.parse().ok()).ok_or_else(malformed)?;
        let faculty = tail.next().filter(|p| !p.is_empty()).ok_or_else(malformed)?;

        Ok(GroupId::new(faculty, course, stream, group))
    }
}
