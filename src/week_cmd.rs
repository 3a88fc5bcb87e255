//! Week command: show the academic week for a date or an explicit number.

use anyhow::{Context, Result};
use tracing::info;

use kairos_calendar::{format_week_range, next_week, prev_week};

use crate::cli::WeekArgs;
use crate::config::KairosConfig;
use crate::convert;

/// Run the week lookup.
pub fn run(args: WeekArgs) -> Result<()> {
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: KairosConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    let table = convert::build_week_table(&config.calendar)?;
    info!(weeks = table.len(), "week table loaded");

    let date = match args.date.as_deref() {
        Some(s) => convert::parse_date(s)?,
        None => chrono::Local::now().date_naive(),
    };

    let week = match args.number {
        Some(number) => table.week(number),
        None => table.current(date, config.calendar.pinned_week),
    };

    if args.number.is_none() {
        if let Some(pinned) = config.calendar.pinned_week {
            info!(pinned, "week pinned by configuration");
        }
    }

    println!(
        "week {} ({}): {}",
        week.number,
        week.parity,
        format_week_range(week.start, week.end)
    );
    println!("  {} .. {}", week.start, week.end);
    println!(
        "  prev: week {}  next: week {}",
        prev_week(week.number),
        next_week(week.number)
    );

    Ok(())
}
