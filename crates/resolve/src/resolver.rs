//! Three-tier slot resolution over a read-only snapshot.

use chrono::NaiveDate;
use kairos_calendar::{DayOfWeek, Parity, date_for_day};
use kairos_topology::GroupId;

use crate::model::{BaseEntry, Cancellation, PlanDay, ReplacementEntry};
use crate::occupant::Occupant;
use crate::slots::Slots;

/// One slot-resolution query.
///
/// `day` and `parity` are supplied by the caller (derived from `date` via
/// the week calendar); the resolver never recomputes them, which is what
/// lets a replacement match on a date where the base schedule would not
/// naturally fire.
#[derive(Debug, Clone, Copy)]
pub struct SlotQuery<'q> {
    pub group: &'q GroupId,
    pub faculty_id: &'q str,
    pub date: NaiveDate,
    pub day: DayOfWeek,
    pub parity: Parity,
    pub time_slot_id: &'q str,
}

/// The slot resolver: borrows read-only slices of the four entry kinds and
/// answers occupancy queries with a fixed priority order.
///
/// Purely functional: no interior mutability, no I/O, no clock. Snapshot
/// consistency across the tiers is the caller's responsibility.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    base: &'a [BaseEntry],
    replacements: &'a [ReplacementEntry],
    cancellations: &'a [Cancellation],
    plan_days: &'a [PlanDay],
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over a snapshot.
    pub fn new(
        base: &'a [BaseEntry],
        replacements: &'a [ReplacementEntry],
        cancellations: &'a [Cancellation],
        plan_days: &'a [PlanDay],
    ) -> Self {
        Resolver {
            base,
            replacements,
            cancellations,
            plan_days,
        }
    }

    /// Resolves the effective occupant of one slot.
    ///
    /// Priority, first match wins:
    /// 1. faculty plan day for (faculty, date), which applies to every
    ///    slot of that date;
    /// 2. replacement for (group, date, slot);
    /// 3. base entry for (group, day, parity, slot), unless cancelled on
    ///    this date;
    /// 4. empty.
    ///
    /// Matching is exact equality on every field; within a tier the first
    /// entry in slice order wins.
    #[tracing::instrument(skip_all, fields(group = %query.group, date = %query.date, slot = query.time_slot_id))]
    pub fn resolve(&self, query: &SlotQuery<'_>) -> Occupant<'a> {
        if let Some(plan) = self.plan_day(query.faculty_id, query.date) {
            return Occupant::PlanDay(plan);
        }
        if let Some(replacement) =
            self.replacement(query.group, query.date, query.time_slot_id)
        {
            return Occupant::Replacement(replacement);
        }
        if let Some(entry) =
            self.base_entry(query.group, query.day, query.parity, query.time_slot_id)
        {
            if self.cancelled(&entry.id, query.date) {
                return Occupant::Empty;
            }
            return Occupant::Base(entry);
        }
        Occupant::Empty
    }

    /// Resolves every slot of one teaching day for a group.
    ///
    /// `date` is the concrete calendar date of that day (see
    /// [`date_for_day`]); `parity` is the parity of the week it falls in.
    /// A plan day is evaluated once and occupies every slot of the date.
    /// Returns `(slot ordinal, occupant)` pairs in teaching order.
    #[tracing::instrument(skip_all, fields(group = %group, date = %date))]
    pub fn resolve_day(
        &self,
        group: &GroupId,
        faculty_id: &str,
        date: NaiveDate,
        day: DayOfWeek,
        parity: Parity,
        slots: &Slots,
    ) -> Vec<(u8, Occupant<'a>)> {
        if let Some(plan) = self.plan_day(faculty_id, date) {
            return slots
                .iter()
                .map(|slot| (slot.number, Occupant::PlanDay(plan)))
                .collect();
        }
        slots
            .iter()
            .map(|slot| {
                let query = SlotQuery {
                    group,
                    faculty_id,
                    date,
                    day,
                    parity,
                    time_slot_id: &slot.id,
                };
                (slot.number, self.resolve(&query))
            })
            .collect()
    }

    /// Resolves a whole teaching day addressed by week start instead of
    /// date: the concrete date is `week_start + day`.
    pub fn resolve_week_day(
        &self,
        group: &GroupId,
        faculty_id: &str,
        week_start: NaiveDate,
        day: DayOfWeek,
        parity: Parity,
        slots: &Slots,
    ) -> Vec<(u8, Occupant<'a>)> {
        let date = date_for_day(week_start, day);
        self.resolve_day(group, faculty_id, date, day, parity, slots)
    }

    /// Returns the plan day for a faculty and date, if any.
    ///
    /// Exposed so callers can render the plan-day banner once per date.
    pub fn plan_day(&self, faculty_id: &str, date: NaiveDate) -> Option<&'a PlanDay> {
        self.plan_days
            .iter()
            .find(|p| p.faculty_id == faculty_id && p.date == date)
    }

    fn replacement(
        &self,
        group: &GroupId,
        date: NaiveDate,
        time_slot_id: &str,
    ) -> Option<&'a ReplacementEntry> {
        self.replacements.iter().find(|r| {
            r.group == *group && r.date == date && r.time_slot_id == time_slot_id
        })
    }

    fn base_entry(
        &self,
        group: &GroupId,
        day: DayOfWeek,
        parity: Parity,
        time_slot_id: &str,
    ) -> Option<&'a BaseEntry> {
        self.base.iter().find(|b| {
            b.group == *group
                && b.day == day
                && b.parity == parity
                && b.time_slot_id == time_slot_id
        })
    }

    fn cancelled(&self, schedule_id: &str, date: NaiveDate) -> bool {
        self.cancellations
            .iter()
            .any(|c| c.schedule_id == schedule_id && c.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn group() -> GroupId {
        GroupId::new("1", 1, 1, 1)
    }

    fn base_entry() -> BaseEntry {
        BaseEntry {
            id: "schedule-1".into(),
            group: group(),
            day: DayOfWeek::Monday,
            parity: Parity::Odd,
            time_slot_id: "slot-1".into(),
            subject_id: "subject-1".into(),
            teacher_id: "teacher-1".into(),
            classroom: "201".into(),
        }
    }

    fn query<'q>(g: &'q GroupId) -> SlotQuery<'q> {
        SlotQuery {
            group: g,
            faculty_id: "1",
            date: date(2024, 9, 2),
            day: DayOfWeek::Monday,
            parity: Parity::Odd,
            time_slot_id: "slot-1",
        }
    }

    #[test]
    fn base_tier_matches() {
        let base = [base_entry()];
        let resolver = Resolver::new(&base, &[], &[], &[]);
        let g = group();
        match resolver.resolve(&query(&g)) {
            Occupant::Base(entry) => assert_eq!(entry.id, "schedule-1"),
            other => panic!("expected base occupant, got {other:?}"),
        }
    }

    #[test]
    fn wrong_parity_is_empty() {
        let base = [base_entry()];
        let resolver = Resolver::new(&base, &[], &[], &[]);
        let g = group();
        let q = SlotQuery {
            parity: Parity::Even,
            ..query(&g)
        };
        assert!(resolver.resolve(&q).is_empty());
    }

    #[test]
    fn wrong_day_is_empty() {
        let base = [base_entry()];
        let resolver = Resolver::new(&base, &[], &[], &[]);
        let g = group();
        let q = SlotQuery {
            day: DayOfWeek::Tuesday,
            ..query(&g)
        };
        assert!(resolver.resolve(&q).is_empty());
    }

    #[test]
    fn wrong_group_is_empty() {
        let base = [base_entry()];
        let resolver = Resolver::new(&base, &[], &[], &[]);
        let other = GroupId::new("1", 1, 1, 2);
        assert!(resolver.resolve(&query(&other)).is_empty());
    }

    #[test]
    fn first_match_wins_within_a_tier() {
        let mut second = base_entry();
        second.id = "schedule-2".into();
        second.classroom = "999".into();
        let base = [base_entry(), second];
        let resolver = Resolver::new(&base, &[], &[], &[]);
        let g = group();
        match resolver.resolve(&query(&g)) {
            Occupant::Base(entry) => assert_eq!(entry.id, "schedule-1"),
            other => panic!("expected base occupant, got {other:?}"),
        }
    }

    #[test]
    fn cancellation_suppresses_base_on_its_date_only() {
        let base = [base_entry()];
        let cancellations = [Cancellation {
            id: "exception-1".into(),
            schedule_id: "schedule-1".into(),
            date: date(2024, 9, 2),
            reason: Some("teacher away".into()),
        }];
        let resolver = Resolver::new(&base, &[], &cancellations, &[]);
        let g = group();

        assert!(resolver.resolve(&query(&g)).is_empty());

        // Two odd weeks later the entry fires again.
        let q = SlotQuery {
            date: date(2024, 9, 16),
            ..query(&g)
        };
        assert!(matches!(resolver.resolve(&q), Occupant::Base(_)));
    }
}
