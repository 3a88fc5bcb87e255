//! Day command: resolve every slot of one teaching day for a group.

use std::collections::HashMap;

use anyhow::{Context, Result};
use tracing::info;

use kairos_calendar::DayOfWeek;
use kairos_resolve::{Occupant, Resolver, Subject, SubjectKind, Teacher};

use crate::cli::DayArgs;
use crate::config::KairosConfig;
use crate::convert;

/// Run the day resolution.
pub fn run(args: DayArgs) -> Result<()> {
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: KairosConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    let table = convert::build_week_table(&config.calendar)?;
    let slots = convert::build_slots(&config.slots)?;
    let subjects = convert::build_subjects(&config.subjects)?;
    let teachers = convert::build_teachers(&config.teachers);
    let base = convert::build_base_entries(&config.schedule)?;
    let replacements = convert::build_replacements(&config.replacements)?;
    let cancellations = convert::build_cancellations(&config.cancellations)?;
    let plan_days = convert::build_plan_days(&config.plan_days)?;

    let group = convert::parse_group(&args.group)?;

    let date = match args.date.as_deref() {
        Some(s) => convert::parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };

    let Some(day) = DayOfWeek::from_date(date) else {
        println!("{date} is a Sunday: no teaching day");
        return Ok(());
    };

    let week = table.resolve(date);
    info!(
        week = week.number,
        parity = %week.parity,
        n_base = base.len(),
        n_replacements = replacements.len(),
        "snapshot loaded"
    );

    let subject_names: HashMap<&str, &Subject> =
        subjects.iter().map(|s| (s.id.as_str(), s)).collect();
    let teacher_names: HashMap<&str, &Teacher> =
        teachers.iter().map(|t| (t.id.as_str(), t)).collect();

    let resolver = Resolver::new(&base, &replacements, &cancellations, &plan_days);

    println!(
        "{} on {} ({}, week {} {})",
        group,
        date,
        day.name(),
        week.number,
        week.parity
    );

    if let Some(plan) = resolver.plan_day(group.faculty(), date) {
        // Whole day suppressed; the banner is rendered once.
        println!("  {}", plan.description);
        if let Some(details) = &plan.details {
            println!("  {details}");
        }
        return Ok(());
    }

    let occupants = resolver.resolve_day(&group, group.faculty(), date, day, week.parity, &slots);
    for (number, occupant) in occupants {
        let slot = slots
            .by_number(number)
            .expect("resolve_day yields configured slot numbers");
        let times = format!(
            "{}-{}",
            slot.start.format("%H:%M"),
            slot.end.format("%H:%M")
        );
        match occupant {
            Occupant::Empty => println!("  {number}. {times}  -"),
            Occupant::Base(entry) => {
                let line = describe(
                    &subject_names,
                    &teacher_names,
                    &entry.subject_id,
                    &entry.teacher_id,
                    &entry.classroom,
                );
                println!("  {number}. {times}  {line}");
            }
            Occupant::Replacement(entry) => {
                let line = describe(
                    &subject_names,
                    &teacher_names,
                    &entry.subject_id,
                    &entry.teacher_id,
                    &entry.classroom,
                );
                match &entry.reason {
                    Some(reason) => {
                        println!("  {number}. {times}  {line} (replacement: {reason})")
                    }
                    None => println!("  {number}. {times}  {line} (replacement)"),
                }
            }
            // Unreachable after the banner above, but the sum type is
            // matched exhaustively.
            Occupant::PlanDay(plan) => println!("  {number}. {times}  {}", plan.description),
        }
    }

    Ok(())
}

/// One-line session description with names resolved from the snapshot.
fn describe(
    subjects: &HashMap<&str, &Subject>,
    teachers: &HashMap<&str, &Teacher>,
    subject_id: &str,
    teacher_id: &str,
    classroom: &str,
) -> String {
    let subject = subjects.get(subject_id);
    let name = subject.map_or(subject_id, |s| s.name.as_str());
    let kind = match subject.map(|s| s.kind) {
        Some(SubjectKind::Lecture) => " [lecture]",
        Some(SubjectKind::Practical) => " [practical]",
        None => "",
    };
    let teacher = teachers.get(teacher_id).map_or(teacher_id, |t| t.name.as_str());
    format!("{name}{kind}, {teacher}, room {classroom}")
}
