//! Live gate collection: scroll, prune, and score

use super::state::{Flyer, Gate};
use crate::score::ScoreTracker;

/// Move every gate left by `speed`
pub fn advance(gates: &mut [Gate], speed: f32) {
    for gate in gates.iter_mut() {
        gate.x -= speed;
    }
}

/// Drop gates whose trailing edge has left the screen, keeping the rest in order
pub fn prune(gates: &mut Vec<Gate>) {
    gates.retain(|g| g.right() >= 0.0);
}

/// Mark gates the flyer has cleared, oldest first.
///
/// Each gate scores at most once; returns `(gate id, score after it)` per newly
/// passed gate.
pub fn score_if_passed(
    gates: &mut [Gate],
    flyer: &Flyer,
    score: &mut ScoreTracker,
) -> Vec<(u32, u32)> {
    let mut passed = Vec::new();
    for gate in gates.iter_mut().filter(|g| !g.passed) {
        if gate.right() < flyer.left() {
            gate.passed = true;
            passed.push((gate.id, score.increment()));
        }
    }
    passed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn gate(id: u32, x: f32) -> Gate {
        Gate {
            id,
            x,
            width: 80.0,
            gap_top: 100.0,
            gap_bottom: 250.0,
            passed: false,
        }
    }

    #[test]
    fn test_advance_moves_all_gates() {
        let mut gates = vec![gate(1, 100.0), gate(2, 300.0)];
        advance(&mut gates, 2.0);
        assert_eq!(gates[0].x, 98.0);
        assert_eq!(gates[1].x, 298.0);
    }

    #[test]
    fn test_prune_keeps_order_and_edge_gate() {
        let mut gates = vec![gate(1, -81.0), gate(2, -80.0), gate(3, 50.0), gate(4, -90.0)];
        prune(&mut gates);
        let ids: Vec<u32> = gates.iter().map(|g| g.id).collect();
        // x + width == 0 is still on the boundary, not past it
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_pass_first_gate_only() {
        let flyer = Flyer::new(&Tuning::default());
        let mut score = ScoreTracker::new(0);
        // First gate trailing edge at -1 + 80 = 79 < 80; second still ahead
        let mut gates = vec![gate(1, -1.0), gate(2, 150.0)];
        let passed = score_if_passed(&mut gates, &flyer, &mut score);
        assert_eq!(passed, vec![(1, 1)]);
        assert_eq!(score.score(), 1);
        assert!(gates[0].passed);
        assert!(!gates[1].passed);
    }

    #[test]
    fn test_no_double_count_across_ticks() {
        let flyer = Flyer::new(&Tuning::default());
        let mut score = ScoreTracker::new(0);
        let mut gates = vec![gate(1, -1.0)];
        score_if_passed(&mut gates, &flyer, &mut score);
        for _ in 0..10 {
            advance(&mut gates, 2.0);
            assert!(score_if_passed(&mut gates, &flyer, &mut score).is_empty());
        }
        assert_eq!(score.score(), 1);
    }

    #[test]
    fn test_trailing_edge_level_with_flyer_does_not_score() {
        let flyer = Flyer::new(&Tuning::default());
        let mut score = ScoreTracker::new(0);
        let mut gates = vec![gate(1, 0.0)];
        assert!(score_if_passed(&mut gates, &flyer, &mut score).is_empty());
        assert!(!gates[0].passed);
    }

    #[test]
    fn test_multiple_gates_score_in_creation_order() {
        let flyer = Flyer::new(&Tuning::default());
        let mut score = ScoreTracker::new(0);
        let mut gates = vec![gate(1, -50.0), gate(2, -10.0)];
        let passed = score_if_passed(&mut gates, &flyer, &mut score);
        assert_eq!(passed, vec![(1, 1), (2, 2)]);
    }
}
