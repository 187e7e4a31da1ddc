//! huddle — weekly meeting-slot search for project teams.
//!
//! Given each collaborator's free hours, finds every (day, hour) slot drawn
//! from the leader's availability where a quorum of the team — a strict
//! majority of the whole group, leader included — is free at the same time.

pub mod engine;
pub mod error;
pub mod ingest;
pub mod model;
pub mod render;
