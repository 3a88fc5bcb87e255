use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Kairos academic timetable resolution engine.
#[derive(Parser)]
#[command(
    name = "kairos",
    version,
    about = "Academic timetable resolution engine"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the academic week for a date or an explicit week number.
    Week(WeekArgs),
    /// Resolve a group's schedule for one day.
    Day(DayArgs),
    /// List the streams and groups of a faculty course.
    Groups(GroupsArgs),
}

/// Arguments for the `week` subcommand.
#[derive(clap::Args)]
pub struct WeekArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "kairos.toml")]
    pub config: PathBuf,

    /// Date to resolve (YYYY-MM-DD); defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,

    /// Explicit week number; bypasses date resolution.
    #[arg(short, long)]
    pub number: Option<u32>,
}

/// Arguments for the `day` subcommand.
#[derive(clap::Args)]
pub struct DayArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "kairos.toml")]
    pub config: PathBuf,

    /// Group key, e.g. 1-2-1-3 (faculty-course-stream-group).
    #[arg(short, long)]
    pub group: String,

    /// Date to resolve (YYYY-MM-DD); defaults to today.
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for the `groups` subcommand.
#[derive(clap::Args)]
pub struct GroupsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "kairos.toml")]
    pub config: PathBuf,

    /// Faculty identifier.
    #[arg(short, long)]
    pub faculty: String,

    /// Course year.
    #[arg(long)]
    pub course: u8,
}
