//! Week-grid ingestion.
//!
//! One CSV file per project. The first column labels each row with an hour
//! range (`"8h-9h"`), the remaining columns are weekdays, and every cell
//! lists the collaborators free in that slot, whitespace-separated, with
//! the project leader carrying a trailing `*`:
//!
//! ```text
//! Hours,Monday,Tuesday,Wednesday
//! 8h-9h,Lia* Ana Rui,,
//! 9h-10h,Ana,Rui,
//! ```
//!
//! Every occurrence of a name appends one interval to that collaborator,
//! in file order; duplicates and overlaps pass through untouched.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::ScheduleError;
use crate::model::{Availability, Hour, HourSpan, Interval, Project, Room, Schedule, Weekday};

/// Parse an `"8h-9h"` row label into its start and end hours.
fn parse_hour_label(label: &str) -> Result<(Hour, Hour), ScheduleError> {
    let bad = || ScheduleError::BadHourLabel(label.trim().to_string());
    let (start, end) = label.trim().split_once('-').ok_or_else(bad)?;
    let hour = |s: &str| {
        s.trim()
            .trim_end_matches(['h', 'H'])
            .parse::<Hour>()
            .map_err(|_| bad())
    };
    Ok((hour(start)?, hour(end)?))
}

/// Parse one project's week grid.
///
/// Rows whose hour range is inverted or empty are skipped with a warning;
/// a grid without a single starred collaborator is an error. When several
/// names are starred the first one stays leader and the rest are demoted
/// to participants.
pub fn parse_project(grid: &str, id: &str, num_meetings: u32) -> Result<Project, ScheduleError> {
    let mut lines = grid.lines().filter(|l| !l.trim().is_empty());
    let header = lines
        .next()
        .ok_or_else(|| ScheduleError::EmptyGrid(id.to_string()))?;

    // The first header cell labels the hour column; the rest are weekdays.
    let days: Vec<Weekday> = header
        .split(',')
        .skip(1)
        .filter(|cell| !cell.trim().is_empty())
        .map(Weekday::from_str)
        .collect::<Result<_, _>>()?;

    let mut names: Vec<String> = Vec::new();
    let mut intervals: Vec<Vec<Interval>> = Vec::new();
    let mut leader: Option<usize> = None;
    let mut saw_row = false;

    for line in lines {
        saw_row = true;
        let mut cells = line.split(',');
        let label = cells.next().unwrap_or_default();
        let (start, end) = parse_hour_label(label)?;
        let span = match HourSpan::new(start, end) {
            Ok(span) => span,
            Err(e) => {
                warn!("{id}: skipping row {:?}: {e}", label.trim());
                continue;
            }
        };

        for (&day, cell) in days.iter().zip(cells) {
            for token in cell.split_whitespace() {
                let (name, starred) = match token.strip_suffix('*') {
                    Some(stripped) => (stripped, true),
                    None => (token, false),
                };
                if name.is_empty() {
                    continue;
                }
                let idx = match names.iter().position(|n| n == name) {
                    Some(idx) => idx,
                    None => {
                        names.push(name.to_string());
                        intervals.push(Vec::new());
                        names.len() - 1
                    }
                };
                intervals[idx].push(Interval { day, span });
                match (starred, leader) {
                    (true, None) => leader = Some(idx),
                    (true, Some(l)) if l != idx => {
                        warn!("{id}: {name} also starred, keeping {} as leader", names[l]);
                    }
                    _ => {}
                }
            }
        }
    }

    if !saw_row {
        return Err(ScheduleError::EmptyGrid(id.to_string()));
    }
    let leader = leader.ok_or_else(|| ScheduleError::NoLeader(id.to_string()))?;

    let leader_name = names.remove(leader);
    let leader_availability = Availability::new(intervals.remove(leader));
    debug!(
        "{id}: leader {leader_name}, participants: {}",
        names.join(", ")
    );

    Ok(Project {
        id: id.to_string(),
        num_meetings,
        leader: leader_availability,
        participants: intervals.into_iter().map(Availability::new).collect(),
    })
}

/// Read one project's grid from disk; the project id is the file stem.
pub fn read_project(path: &Path, num_meetings: u32) -> Result<Project, ScheduleError> {
    let id = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("project");
    let grid = fs::read_to_string(path)?;
    parse_project(&grid, id, num_meetings)
}

/// Ingest every `*.csv` in `dir` plus the room list into a [`Schedule`].
pub fn load_schedule(
    dir: &Path,
    num_meetings: u32,
    rooms: Vec<Room>,
) -> Result<Schedule, ScheduleError> {
    let mut paths: Vec<_> = fs::read_dir(dir)?
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|p| p.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv")))
        .collect();
    // File-name order keeps project order stable across runs.
    paths.sort();

    let mut projects = Vec::with_capacity(paths.len());
    for path in &paths {
        projects.push(read_project(path, num_meetings)?);
    }
    Ok(Schedule { projects, rooms })
}
