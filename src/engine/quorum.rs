// ── Quorum Arithmetic ────────────────────────────────────────────

/// Minimum head-count (leader included) for a slot to be admissible: the
/// smallest integer no less than `(participants + 1) / 2` under real
/// division, i.e. a strict majority of the whole group.
///
/// The boundary matters when `participants` is even: 2 participants put the
/// cutoff at 1.5, so the leader alone is not enough — flooring the division
/// instead would admit the slot with no participant present.
pub fn quorum_threshold(participants: usize) -> usize {
    participants / 2 + 1
}

/// True iff `head_count` collaborators (leader included) reach quorum for a
/// project with `participants` non-leader collaborators.
pub fn meets_quorum(head_count: usize, participants: usize) -> bool {
    head_count >= quorum_threshold(participants)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_table() {
        assert_eq!(quorum_threshold(0), 1);
        assert_eq!(quorum_threshold(1), 1);
        assert_eq!(quorum_threshold(2), 2);
        assert_eq!(quorum_threshold(3), 2);
        assert_eq!(quorum_threshold(4), 3);
    }

    #[test]
    fn threshold_is_smallest_integer_above_half() {
        // T is the least integer with 2T >= P + 1.
        for p in 0..100 {
            let t = quorum_threshold(p);
            assert!(2 * t >= p + 1, "threshold too low for {p} participants");
            assert!(2 * (t - 1) < p + 1, "threshold not minimal for {p} participants");
        }
    }

    #[test]
    fn leader_alone_with_even_participants() {
        // Head-count 1 (leader only) fails once there are 2+ participants.
        assert!(meets_quorum(1, 0));
        assert!(meets_quorum(1, 1));
        assert!(!meets_quorum(1, 2));
        assert!(meets_quorum(2, 2));
        assert!(!meets_quorum(2, 4));
    }
}
