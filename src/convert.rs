//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveTime};

use kairos_calendar::{DayOfWeek, Parity, WeekTable};
use kairos_resolve::{
    BaseEntry, Cancellation, PlanDay, ReplacementEntry, Slots, Subject, SubjectKind, Teacher,
    TimeSlot,
};
use kairos_topology::{CourseConfig, Faculty, GroupId, Topology};

use crate::config::*;

/// Parses a calendar date in the YYYY-MM-DD form.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("invalid date: {s:?}"))
}

/// Parses a clock time in the HH:MM form.
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").with_context(|| format!("invalid clock time: {s:?}"))
}

/// Parses a week-parity name into the corresponding enum variant.
pub fn parse_parity(s: &str) -> Result<Parity> {
    match s.to_lowercase().as_str() {
        "odd" => Ok(Parity::Odd),
        "even" => Ok(Parity::Even),
        other => bail!("unknown week parity: {other:?} (expected odd or even)"),
    }
}

/// Parses a subject-kind name into the corresponding enum variant.
pub fn parse_subject_kind(s: &str) -> Result<SubjectKind> {
    match s.to_lowercase().as_str() {
        "lecture" => Ok(SubjectKind::Lecture),
        "practical" => Ok(SubjectKind::Practical),
        other => bail!("unknown subject kind: {other:?} (expected lecture or practical)"),
    }
}

/// Parses a rendered group key.
pub fn parse_group(s: &str) -> Result<GroupId> {
    s.parse::<GroupId>()
        .with_context(|| format!("invalid group key: {s:?}"))
}

/// Builds the week table from the `[calendar]` section.
pub fn build_week_table(calendar: &CalendarToml) -> Result<WeekTable> {
    let starts = calendar
        .week_starts
        .iter()
        .map(|s| parse_date(s))
        .collect::<Result<Vec<_>>>()
        .context("[calendar].week_starts")?;
    WeekTable::new(starts).context("[calendar].week_starts")
}

/// Builds the daily slot sequence from `[[slots]]`, falling back to the
/// built-in six-slot sequence when the section is omitted.
pub fn build_slots(slots: &[SlotToml]) -> Result<Slots> {
    if slots.is_empty() {
        return Ok(Slots::standard());
    }
    let slots = slots
        .iter()
        .map(|s| {
            Ok(TimeSlot {
                id: format!("slot-{}", s.number),
                number: s.number,
                start: parse_time(&s.start).with_context(|| format!("slot {}", s.number))?,
                end: parse_time(&s.end).with_context(|| format!("slot {}", s.number))?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Slots::new(slots).context("[[slots]]")
}

/// Builds the course topology from `[[courses]]` and `[[course_overrides]]`.
pub fn build_topology(config: &KairosConfig) -> Topology {
    let record = |c: &CourseToml| {
        CourseConfig::new(c.faculty.clone(), c.course, c.streams, c.groups_per_stream)
    };
    Topology::new(config.courses.iter().map(record).collect())
        .with_overrides(config.course_overrides.iter().map(record).collect())
}

/// Builds the faculty list from `[[faculties]]`.
pub fn build_faculties(faculties: &[FacultyToml]) -> Vec<Faculty> {
    faculties
        .iter()
        .map(|f| Faculty {
            id: f.id.clone(),
            name: f.name.clone(),
            short_name: f.short_name.clone(),
        })
        .collect()
}

/// Builds the subject list from `[[subjects]]`.
pub fn build_subjects(subjects: &[SubjectToml]) -> Result<Vec<Subject>> {
    subjects
        .iter()
        .map(|s| {
            Ok(Subject {
                id: s.id.clone(),
                name: s.name.clone(),
                kind: parse_subject_kind(&s.kind)
                    .with_context(|| format!("subject {:?}", s.id))?,
            })
        })
        .collect()
}

/// Builds the teacher list from `[[teachers]]`.
pub fn build_teachers(teachers: &[TeacherToml]) -> Vec<Teacher> {
    teachers
        .iter()
        .map(|t| Teacher {
            id: t.id.clone(),
            name: t.name.clone(),
        })
        .collect()
}

/// Builds the base-schedule entries from `[[schedule]]`.
pub fn build_base_entries(schedule: &[ScheduleToml]) -> Result<Vec<BaseEntry>> {
    schedule
        .iter()
        .map(|e| {
            let context = || format!("schedule entry {:?}", e.id);
            Ok(BaseEntry {
                id: e.id.clone(),
                group: parse_group(&e.group).with_context(context)?,
                day: DayOfWeek::from_index(e.day).with_context(context)?,
                parity: parse_parity(&e.week).with_context(context)?,
                time_slot_id: e.slot.clone(),
                subject_id: e.subject.clone(),
                teacher_id: e.teacher.clone(),
                classroom: e.classroom.clone(),
            })
        })
        .collect()
}

/// Builds the replacement entries from `[[replacements]]`.
pub fn build_replacements(replacements: &[ReplacementToml]) -> Result<Vec<ReplacementEntry>> {
    replacements
        .iter()
        .map(|e| {
            let context = || format!("replacement {:?}", e.id);
            Ok(ReplacementEntry {
                id: e.id.clone(),
                group: parse_group(&e.group).with_context(context)?,
                date: parse_date(&e.date).with_context(context)?,
                time_slot_id: e.slot.clone(),
                subject_id: e.subject.clone(),
                teacher_id: e.teacher.clone(),
                classroom: e.classroom.clone(),
                reason: e.reason.clone(),
            })
        })
        .collect()
}

/// Builds the cancellations from `[[cancellations]]`.
pub fn build_cancellations(cancellations: &[CancellationToml]) -> Result<Vec<Cancellation>> {
    cancellations
        .iter()
        .map(|e| {
            Ok(Cancellation {
                id: e.id.clone(),
                schedule_id: e.schedule.clone(),
                date: parse_date(&e.date)
                    .with_context(|| format!("cancellation {:?}", e.id))?,
                reason: e.reason.clone(),
            })
        })
        .collect()
}

/// Builds the plan days from `[[plan_days]]`.
pub fn build_plan_days(plan_days: &[PlanDayToml]) -> Result<Vec<PlanDay>> {
    plan_days
        .iter()
        .map(|e| {
            Ok(PlanDay {
                id: e.id.clone(),
                faculty_id: e.faculty.clone(),
                date: parse_date(&e.date).with_context(|| format!("plan day {:?}", e.id))?,
                description: e.description.clone(),
                details: e.details.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_ok() {
        assert_eq!(
            parse_date("2024-09-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
        );
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("01.09.2024").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn parse_time_ok() {
        assert_eq!(
            parse_time("08:30").unwrap(),
            NaiveTime::from_hms_opt(8, 30, 0).unwrap()
        );
    }

    #[test]
    fn parse_parity_case_insensitive() {
        assert_eq!(parse_parity("Odd").unwrap(), Parity::Odd);
        assert_eq!(parse_parity("EVEN").unwrap(), Parity::Even);
        assert!(parse_parity("both").is_err());
    }

    #[test]
    fn parse_subject_kind_variants() {
        assert_eq!(parse_subject_kind("lecture").unwrap(), SubjectKind::Lecture);
        assert_eq!(
            parse_subject_kind("practical").unwrap(),
            SubjectKind::Practical
        );
        assert!(parse_subject_kind("seminar").is_err());
    }

    #[test]
    fn build_slots_defaults_when_omitted() {
        let slots = build_slots(&[]).unwrap();
        assert_eq!(slots.len(), 6);
    }

    #[test]
    fn build_slots_from_config() {
        let raw = vec![
            SlotToml {
                number: 1,
                start: "09:00".into(),
                end: "10:30".into(),
            },
            SlotToml {
                number: 2,
                start: "10:40".into(),
                end: "12:10".into(),
            },
        ];
        let slots = build_slots(&raw).unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots.by_id("slot-2").unwrap().number, 2);
    }
}
