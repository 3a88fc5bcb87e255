//! Stream and group enumeration with a layered course configuration.

use crate::course::CourseConfig;
use crate::group_id::GroupId;

/// Streams assumed for a course with no configuration record.
const DEFAULT_STREAMS: u8 = 1;

/// Groups per stream assumed for a course with no configuration record.
const DEFAULT_GROUPS_PER_STREAM: u8 = 5;

/// The effective course topology: static default records plus an
/// administrator-editable override layer.
///
/// Overrides are an explicit constructor parameter; the caller loads and
/// supplies them, keeping every lookup here pure. For a given
/// (faculty, course) key the override record wins when present, then the
/// default record, then the built-in 1-stream / 5-group fallback.
/// Enumeration therefore never fails and never returns an empty sequence.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    defaults: Vec<CourseConfig>,
    overrides: Vec<CourseConfig>,
}

impl Topology {
    /// Creates a topology from the static default records.
    pub fn new(defaults: Vec<CourseConfig>) -> Self {
        Topology {
            defaults,
            overrides: Vec::new(),
        }
    }

    /// Replaces the override layer.
    pub fn with_overrides(mut self, overrides: Vec<CourseConfig>) -> Self {
        self.overrides = overrides;
        self
    }

    fn effective(&self, faculty_id: &str, course: u8) -> Option<&CourseConfig> {
        self.overrides
            .iter()
            .find(|c| c.matches(faculty_id, course))
            .or_else(|| self.defaults.iter().find(|c| c.matches(faculty_id, course)))
    }

    /// Returns the ordered stream numbers `1..=N` for a faculty/course
    /// pair.
    pub fn streams_for(&self, faculty_id: &str, course: u8) -> Vec<u8> {
        let n = self
            .effective(faculty_id, course)
            .map_or(DEFAULT_STREAMS, |c| c.streams);
        (1..=n.max(1)).collect()
    }

    /// Returns the ordered group numbers `1..=M` for a faculty/course
    /// pair.
    pub fn groups_for(&self, faculty_id: &str, course: u8) -> Vec<u8> {
        let m = self
            .effective(faculty_id, course)
            .map_or(DEFAULT_GROUPS_PER_STREAM, |c| c.groups_per_stream);
        (1..=m.max(1)).collect()
    }

    /// Enumerates every group key of a faculty/course pair, stream-major.
    pub fn group_ids(&self, faculty_id: &str, course: u8) -> Vec<GroupId> {
        let mut ids = Vec::new();
        for stream in self.streams_for(faculty_id, course) {
            for group in self.groups_for(faculty_id, course) {
                ids.push(GroupId::new(faculty_id, course, stream, group));
            }
        }
        ids
    }
}
