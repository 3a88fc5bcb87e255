use serde::Deserialize;

/// Top-level Kairos configuration: the academic calendar plus the
/// read-only data snapshot the resolver consumes.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KairosConfig {
    /// Week table and current-week settings.
    pub calendar: CalendarToml,

    /// Daily time slots; the built-in six-slot sequence applies when
    /// omitted.
    #[serde(default)]
    pub slots: Vec<SlotToml>,

    /// Faculties.
    #[serde(default)]
    pub faculties: Vec<FacultyToml>,

    /// Static course-configuration records.
    #[serde(default)]
    pub courses: Vec<CourseToml>,

    /// Administrator overrides of course records.
    #[serde(default)]
    pub course_overrides: Vec<CourseToml>,

    /// Subjects.
    #[serde(default)]
    pub subjects: Vec<SubjectToml>,

    /// Teachers.
    #[serde(default)]
    pub teachers: Vec<TeacherToml>,

    /// Recurring base-schedule entries.
    #[serde(default)]
    pub schedule: Vec<ScheduleToml>,

    /// Date-specific replacements.
    #[serde(default)]
    pub replacements: Vec<ReplacementToml>,

    /// Date-specific cancellations of base entries.
    #[serde(default)]
    pub cancellations: Vec<CancellationToml>,

    /// Faculty-wide plan days.
    #[serde(default)]
    pub plan_days: Vec<PlanDayToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    /// Ordered week-start dates (YYYY-MM-DD), one per academic week.
    pub week_starts: Vec<String>,

    /// Pin the current week to a fixed number instead of deriving it
    /// from today's date.
    #[serde(default)]
    pub pinned_week: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotToml {
    pub number: u8,
    /// Start clock time (HH:MM).
    pub start: String,
    /// End clock time (HH:MM).
    pub end: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FacultyToml {
    pub id: String,
    pub name: String,
    pub short_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseToml {
    pub faculty: String,
    pub course: u8,
    pub streams: u8,
    pub groups_per_stream: u8,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubjectToml {
    pub id: String,
    pub name: String,
    /// "lecture" or "practical".
    pub kind: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeacherToml {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleToml {
    pub id: String,
    /// Group key in the faculty-course-stream-group form.
    pub group: String,
    /// Teaching day index, 0 (Monday) .. 5 (Saturday).
    pub day: u8,
    /// Week parity: "odd" or "even".
    pub week: String,
    /// Time-slot identifier, e.g. "slot-1".
    pub slot: String,
    pub subject: String,
    pub teacher: String,
    pub classroom: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplacementToml {
    pub id: String,
    pub group: String,
    /// Exact date (YYYY-MM-DD).
    pub date: String,
    pub slot: String,
    pub subject: String,
    pub teacher: String,
    pub classroom: String,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CancellationToml {
    pub id: String,
    /// Id of the suppressed base-schedule entry.
    pub schedule: String,
    /// Exact date (YYYY-MM-DD).
    pub date: String,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanDayToml {
    pub id: String,
    pub faculty: String,
    /// Exact date (YYYY-MM-DD).
    pub date: String,
    pub description: String,
    #[serde(default)]
    pub details: Option<String>,
}
