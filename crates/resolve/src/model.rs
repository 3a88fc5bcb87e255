//! The entry model: the read-only snapshot entities the resolver consumes.
//!
//! All identifiers are opaque strings except the group key, which is the
//! typed composite [`GroupId`]. Entities are owned by the external data
//! collaborator; the resolver only ever borrows them.

use chrono::NaiveDate;
use kairos_calendar::{DayOfWeek, Parity};
use kairos_topology::GroupId;

/// Kind of a taught subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectKind {
    Lecture,
    Practical,
}

/// A taught subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub kind: SubjectKind,
}

/// A teacher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub id: String,
    pub name: String,
}

/// A recurring base-schedule entry: one slot assignment that applies every
/// week of its parity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseEntry {
    pub id: String,
    pub group: GroupId,
    pub day: DayOfWeek,
    pub parity: Parity,
    pub time_slot_id: String,
    pub subject_id: String,
    pub teacher_id: String,
    pub classroom: String,
}

/// A one-off override of a single slot on a specific date.
///
/// Matches purely by explicit date and slot; parity is never recomputed,
/// so a replacement applies even on a date where the base schedule would
/// not naturally fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementEntry {
    pub id: String,
    pub group: GroupId,
    pub date: NaiveDate,
    pub time_slot_id: String,
    pub subject_id: String,
    pub teacher_id: String,
    pub classroom: String,
    pub reason: Option<String>,
}

/// A one-off suppression of a single base entry on a specific date.
///
/// References the base entry by id; it affects the base tier only and
/// never hides a replacement scheduled for the same slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cancellation {
    pub id: String,
    pub schedule_id: String,
    pub date: NaiveDate,
    pub reason: Option<String>,
}

/// A whole-day, whole-faculty suppression of normal teaching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDay {
    pub id: String,
    pub faculty_id: String,
    pub date: NaiveDate,
    pub description: String,
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_are_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<Subject>();
        assert_impl::<Teacher>();
        assert_impl::<BaseEntry>();
        assert_impl::<ReplacementEntry>();
        assert_impl::<Cancellation>();
        assert_impl::<PlanDay>();
    }

    #[test]
    fn subject_kind_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<SubjectKind>();
    }
}
