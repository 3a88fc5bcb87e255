//! Groups command: list the streams and groups of a faculty course.

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::GroupsArgs;
use crate::config::KairosConfig;
use crate::convert;

/// Run the topology listing.
pub fn run(args: GroupsArgs) -> Result<()> {
    let toml_str = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file: {}", args.config.display()))?;
    let config: KairosConfig = toml::from_str(&toml_str).context("failed to parse TOML config")?;

    let topology = convert::build_topology(&config);
    let faculties = convert::build_faculties(&config.faculties);
    info!(
        n_courses = config.courses.len(),
        n_overrides = config.course_overrides.len(),
        "topology loaded"
    );

    let faculty_name = faculties
        .iter()
        .find(|f| f.id == args.faculty)
        .map_or_else(|| args.faculty.clone(), |f| f.short_name.clone());

    let streams = topology.streams_for(&args.faculty, args.course);
    let groups = topology.groups_for(&args.faculty, args.course);

    println!("{faculty_name} course {}:", args.course);
    println!(
        "  {} stream(s), {} group(s) per stream",
        streams.len(),
        groups.len()
    );
    for id in topology.group_ids(&args.faculty, args.course) {
        println!("  {id}");
    }

    Ok(())
}
