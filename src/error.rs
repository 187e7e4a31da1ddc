use std::io;

use crate::model::Hour;

#[derive(Debug)]
pub enum ScheduleError {
    /// Interval with `start >= end` — rejected at construction.
    InvalidInterval { start: Hour, end: Hour },
    Io(io::Error),
    /// A week grid with a header but no data rows.
    EmptyGrid(String),
    UnknownDay(String),
    /// Row label that doesn't look like `"8h-9h"`.
    BadHourLabel(String),
    /// No collaborator carries the `*` leader marker.
    NoLeader(String),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::InvalidInterval { start, end } => {
                write!(f, "invalid interval [{start}, {end}): start must be before end")
            }
            ScheduleError::Io(e) => write!(f, "io error: {e}"),
            ScheduleError::EmptyGrid(name) => write!(f, "week grid {name} has no data rows"),
            ScheduleError::UnknownDay(name) => write!(f, "unknown weekday: {name}"),
            ScheduleError::BadHourLabel(label) => {
                write!(f, "malformed hour label {label:?}, expected e.g. \"8h-9h\"")
            }
            ScheduleError::NoLeader(name) => {
                write!(f, "no leader marked with '*' in {name}")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

impl From<io::Error> for ScheduleError {
    fn from(e: io::Error) -> Self {
        ScheduleError::Io(e)
    }
}
