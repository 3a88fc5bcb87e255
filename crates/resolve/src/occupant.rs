//! The resolution result: what occupies a slot.

use crate::model::{BaseEntry, PlanDay, ReplacementEntry};

/// The effective occupant of one (group, date, slot) query.
///
/// A closed sum over the four possible outcomes, borrowed from the
/// snapshot the resolver was built over. Call sites match exhaustively;
/// there is no type-tag string or nullable blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant<'a> {
    /// No session in this slot.
    Empty,
    /// The recurring base-schedule entry applies.
    Base(&'a BaseEntry),
    /// A date-specific replacement overrides the base schedule.
    Replacement(&'a ReplacementEntry),
    /// A faculty plan day suppresses the whole date.
    PlanDay(&'a PlanDay),
}

impl<'a> Occupant<'a> {
    /// Returns `true` if the slot has no session.
    pub fn is_empty(&self) -> bool {
        matches!(self, Occupant::Empty)
    }
}
