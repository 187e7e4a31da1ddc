use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::info;

use huddle::engine::admissible_slots;
use huddle::ingest;
use huddle::model::Room;
use huddle::render;

/// Weekly meeting-slot scheduler: reads per-project week grids and prints
/// the hours at which each project's team can meet.
#[derive(Parser)]
#[command(name = "huddle", version)]
struct Args {
    /// Directory holding one week-grid CSV per project
    schedules: PathBuf,

    /// Meetings to hold per week for every project
    #[arg(long, default_value_t = 1)]
    meetings: u32,

    /// Comma-separated ids of the rooms on file
    #[arg(long, value_delimiter = ',')]
    rooms: Vec<u32>,

    /// Emit a JSON report instead of the week table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let rooms: Vec<Room> = args
        .rooms
        .iter()
        .map(|&id| Room { id, available: true })
        .collect();
    let schedule = ingest::load_schedule(&args.schedules, args.meetings, rooms)?;
    info!(
        "loaded {} project(s) from {}",
        schedule.projects.len(),
        args.schedules.display()
    );
    if !schedule.rooms.is_empty() {
        info!(
            "{} room(s) on file; room assignment is not performed",
            schedule.rooms.len()
        );
    }

    let mut results = Vec::with_capacity(schedule.projects.len());
    for project in &schedule.projects {
        let started = Instant::now();
        let slots = admissible_slots(project);
        let found: usize = slots.values().map(Vec::len).sum();
        info!(
            "project {}: {found} admissible hour(s) in {:.2?}",
            project.id,
            started.elapsed()
        );
        results.push((project.id.clone(), slots));
    }

    if args.json {
        println!("{}", render::json_report(&results)?);
    } else {
        print!("{}", render::week_table(&results));
    }
    Ok(())
}
