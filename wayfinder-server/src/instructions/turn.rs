//! Turn direction classification.

use crate::domain::Vector3;

/// Minimum |cross product| (square meters) that counts as a turn.
///
/// Smaller values are treated as going straight so that near-collinear
/// nodes do not produce spurious turns.
pub const TURN_THRESHOLD: f64 = 0.1;

/// Direction of travel at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnDirection {
    Left,
    Right,
    Straight,
}

/// Classifies the turn made at `current` when walking `previous -> current -> next`.
///
/// Uses the X-Z cross product of the incoming and outgoing vectors.
pub fn classify_turn(previous: Vector3, current: Vector3, next: Vector3) -> TurnDirection {
    let incoming = current - previous;
    let outgoing = next - current;
    let cross = incoming.cross_xz(&outgoing);

    if cross > TURN_THRESHOLD {
        TurnDirection::Left
    } else if cross < -TURN_THRESHOLD {
        TurnDirection::Right
    } else {
        TurnDirection::Straight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, z: f64) -> Vector3 {
        Vector3::new(x, 0.0, z)
    }

    #[test]
    fn positive_cross_is_left() {
        // +x then +z
        assert_eq!(
            classify_turn(p(0.0, 0.0), p(5.0, 0.0), p(5.0, 5.0)),
            TurnDirection::Left
        );
    }

    #[test]
    fn negative_cross_is_right() {
        // +x then -z
        assert_eq!(
            classify_turn(p(0.0, 0.0), p(5.0, 0.0), p(5.0, -5.0)),
            TurnDirection::Right
        );
    }

    #[test]
    fn collinear_is_straight() {
        assert_eq!(
            classify_turn(p(0.0, 0.0), p(5.0, 0.0), p(10.0, 0.0)),
            TurnDirection::Straight
        );
    }

    #[test]
    fn tiny_deviation_is_straight() {
        // cross = 1 * 0.05 = 0.05, under the threshold
        assert_eq!(
            classify_turn(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.05)),
            TurnDirection::Straight
        );
    }

    #[test]
    fn threshold_is_exclusive() {
        // cross exactly 0.1 is still straight
        assert_eq!(
            classify_turn(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.1)),
            TurnDirection::Straight
        );
        assert_eq!(
            classify_turn(p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.2)),
            TurnDirection::Left
        );
    }

    #[test]
    fn height_is_ignored() {
        let prev = Vector3::new(0.0, 0.0, 0.0);
        let cur = Vector3::new(5.0, 3.0, 0.0);
        let next = Vector3::new(5.0, 6.0, 5.0);
        assert_eq!(classify_turn(prev, cur, next), TurnDirection::Left);
    }

    #[test]
    fn zero_length_segment_is_straight() {
        assert_eq!(
            classify_turn(p(1.0, 1.0), p(1.0, 1.0), p(4.0, 9.0)),
            TurnDirection::Straight
        );
    }
}
