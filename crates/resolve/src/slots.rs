//! Time slots: the fixed daily sequence of numbered teaching periods.

use chrono::NaiveTime;

use crate::error::SlotsError;

/// One numbered period in the daily timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    /// Opaque identifier referenced by schedule entries.
    pub id: String,
    /// 1-based ordinal within the day.
    pub number: u8,
    /// Start clock time.
    pub start: NaiveTime,
    /// End clock time.
    pub end: NaiveTime,
}

/// A validated, ordered slot sequence.
///
/// Construction sorts by ordinal and rejects empty sequences, duplicate
/// ordinals, and empty spans; afterwards iteration order is the teaching
/// order of the day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slots {
    slots: Vec<TimeSlot>,
}

impl Slots {
    /// Creates a validated slot sequence.
    ///
    /// # Errors
    ///
    /// Returns [`SlotsError::Empty`] for an empty list,
    /// [`SlotsError::DuplicateNumber`] if two slots share an ordinal, and
    /// [`SlotsError::EmptySpan`] if a slot ends at or before it starts.
    pub fn new(mut slots: Vec<TimeSlot>) -> Result<Self, SlotsError> {
        if slots.is_empty() {
            return Err(SlotsError::Empty);
        }
        slots.sort_by_key(|s| s.number);
        for pair in slots.windows(2) {
            if pair[0].number == pair[1].number {
                return Err(SlotsError::DuplicateNumber {
                    number: pair[0].number,
                });
            }
        }
        for slot in &slots {
            if slot.start >= slot.end {
                return Err(SlotsError::EmptySpan {
                    number: slot.number,
                    start: slot.start,
                    end: slot.end,
                });
            }
        }
        Ok(Slots { slots })
    }

    /// The reference six-slot configuration.
    pub fn standard() -> Self {
        fn slot(number: u8, sh: u32, sm: u32, eh: u32, em: u32) -> TimeSlot {
            TimeSlot {
                id: format!("slot-{number}"),
                number,
                start: NaiveTime::from_hms_opt(sh, sm, 0).expect("valid literal time"),
                end: NaiveTime::from_hms_opt(eh, em, 0).expect("valid literal time"),
            }
        }
        Slots::new(vec![
            slot(1, 8, 30, 10, 0),
            slot(2, 10, 10, 11, 40),
            slot(3, 12, 10, 13, 40),
            slot(4, 13, 50, 15, 20),
            slot(5, 15, 30, 17, 0),
            slot(6, 17, 10, 18, 40),
        ])
        .expect("standard slots are valid")
    }

    /// Slots in teaching order.
    pub fn iter(&self) -> std::slice::Iter<'_, TimeSlot> {
        self.slots.iter()
    }

    /// Number of slots per day.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: construction rejects empty sequences.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Looks a slot up by its opaque id.
    pub fn by_id(&self, id: &str) -> Option<&TimeSlot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Looks a slot up by its 1-based ordinal.
    pub fn by_number(&self, number: u8) -> Option<&TimeSlot> {
        self.slots.iter().find(|s| s.number == number)
    }
}

impl<'a> IntoIterator for &'a Slots {
    type Item = &'a TimeSlot;
    type IntoIter = std::slice::Iter<'a, TimeSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
