use std::collections::BTreeMap;

use crate::model::{Hour, Project, Weekday};

use super::quorum::meets_quorum;

// ── Slot Feasibility Search ──────────────────────────────────────

/// Admissible hours per weekday, ascending on both axes.
pub type SlotMap = BTreeMap<Weekday, Vec<Hour>>;

/// Find every (day, hour) slot where the project's weekly meeting can be
/// held: the hour lies inside the leader's availability and a quorum of the
/// team is free at the same time.
///
/// Every day the leader is available appears in the result, with an empty
/// hour list when no hour on it reaches quorum. Hours are judged
/// independently, so the admissible set may be non-contiguous. Pure and
/// deterministic: identical input always yields the identical map.
pub fn admissible_slots(project: &Project) -> SlotMap {
    let mut slots = SlotMap::new();
    for day in project.leader.days() {
        // Leader hours are deduplicated per day, so an hour listed in two of
        // the leader's intervals is evaluated once.
        let admissible = project
            .leader
            .hours_on(day)
            .into_iter()
            .filter(|&hour| {
                // The leader counts as present: the hour came from their own
                // intervals. Every participant is tested; only the count
                // matters, so evaluation order is irrelevant.
                let head_count = 1 + project
                    .participants
                    .iter()
                    .filter(|p| p.covers(day, hour))
                    .count();
                meets_quorum(head_count, project.participants.len())
            })
            .collect();
        slots.insert(day, admissible);
    }
    slots
}
