//! Movement Controller
//!
//! Turns the held directions into a candidate position and decides whether
//! the player gets to keep it.
//!
//! Directions add up independently, so holding two perpendicular keys moves
//! `speed` along both axes in the same tick (a diagonal is ~1.41x faster
//! than a straight line). This matches how the demo has always played and
//! is intentionally not normalized.

use macroquad::math::Vec2;

use super::collision::CollisionDetector;
use super::player::Player;
use crate::config::Variant;
use crate::input::InputState;
use crate::world::WorldGeometry;

/// How a candidate position is turned into a committed one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementPolicy {
    /// Clamp the candidate into the world bounds and always accept it
    Clamp,
    /// Reject the whole tick's movement if the candidate leaves the world
    /// or overlaps an obstacle. No per-axis sliding.
    Discard,
}

impl MovementPolicy {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Open => MovementPolicy::Clamp,
            Variant::Obstacles => MovementPolicy::Discard,
        }
    }
}

/// Why a move was thrown away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    OutOfBounds,
    /// Index into `WorldGeometry::obstacles()`
    Obstacle(usize),
}

/// Result of one movement step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveOutcome {
    /// No net input, or clamping left the player where it was
    Idle,
    Moved { from: Vec2, to: Vec2 },
    Blocked { candidate: Vec2, reason: BlockReason },
}

#[derive(Debug, Clone, Copy)]
pub struct MovementController {
    policy: MovementPolicy,
}

impl MovementController {
    pub fn new(policy: MovementPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MovementPolicy {
        self.policy
    }

    /// Per-tick displacement for the held directions
    pub fn delta(input: &InputState, speed: f32) -> Vec2 {
        input.held().fold(Vec2::ZERO, |acc, direction| {
            let (dx, dy) = direction.step();
            acc + Vec2::new(dx, dy) * speed
        })
    }

    /// Advance the player by one tick of input
    pub fn step(&self, player: &mut Player, input: &InputState, world: &WorldGeometry) -> MoveOutcome {
        let delta = Self::delta(input, player.speed);
        if delta == Vec2::ZERO {
            return MoveOutcome::Idle;
        }

        let from = player.position;
        let candidate = from + delta;

        let to = match self.policy {
            MovementPolicy::Clamp => Vec2::new(
                candidate.x.clamp(0.0, (world.width() - player.size).max(0.0)),
                candidate.y.clamp(0.0, (world.height() - player.size).max(0.0)),
            ),
            MovementPolicy::Discard => {
                if !world.contains_square(candidate.x, candidate.y, player.size) {
                    return MoveOutcome::Blocked { candidate, reason: BlockReason::OutOfBounds };
                }
                let detector = CollisionDetector::new(world, player.size);
                if let Some(index) = detector.first_hit(candidate.x, candidate.y) {
                    return MoveOutcome::Blocked { candidate, reason: BlockReason::Obstacle(index) };
                }
                candidate
            }
        };

        if to == from {
            return MoveOutcome::Idle;
        }
        player.position = to;
        MoveOutcome::Moved { from, to }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Direction;
    use crate::world::rect_points;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(Vec2::new(x, y), 40.0, 5.0)
    }

    #[test]
    fn test_each_direction() {
        let world = WorldGeometry::new(1000.0, 1000.0);
        let controller = MovementController::new(MovementPolicy::Clamp);
        let cases = [
            (Direction::Up, Vec2::new(100.0, 95.0)),
            (Direction::Down, Vec2::new(100.0, 105.0)),
            (Direction::Left, Vec2::new(95.0, 100.0)),
            (Direction::Right, Vec2::new(105.0, 100.0)),
        ];
        for (direction, expected) in cases {
            let mut player = player_at(100.0, 100.0);
            controller.step(&mut player, &InputState::with_held(&[direction]), &world);
            assert_eq!(player.position, expected, "{:?}", direction);
        }
    }

    #[test]
    fn test_diagonal_is_additive() {
        let world = WorldGeometry::new(1000.0, 1000.0);
        for policy in [MovementPolicy::Clamp, MovementPolicy::Discard] {
            let mut player = player_at(100.0, 100.0);
            let input = InputState::with_held(&[Direction::Up, Direction::Left]);
            let outcome = MovementController::new(policy).step(&mut player, &input, &world);
            assert_eq!(player.position, Vec2::new(95.0, 95.0));
            assert_eq!(
                outcome,
                MoveOutcome::Moved { from: Vec2::new(100.0, 100.0), to: Vec2::new(95.0, 95.0) }
            );
        }
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let world = WorldGeometry::new(1000.0, 1000.0);
        let mut player = player_at(100.0, 100.0);
        let input = InputState::with_held(&[Direction::Left, Direction::Right]);
        let outcome = MovementController::new(MovementPolicy::Discard).step(&mut player, &input, &world);
        assert_eq!(outcome, MoveOutcome::Idle);
        assert_eq!(player.position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_clamp_policy_stops_at_edges() {
        let world = WorldGeometry::new(200.0, 200.0);
        let controller = MovementController::new(MovementPolicy::Clamp);

        let mut player = player_at(2.0, 158.0);
        let input = InputState::with_held(&[Direction::Left, Direction::Down]);
        controller.step(&mut player, &input, &world);
        assert_eq!(player.position, Vec2::new(0.0, 160.0));

        // Pinned in the corner: no change
        let outcome = controller.step(&mut player, &input, &world);
        assert_eq!(outcome, MoveOutcome::Idle);
        assert_eq!(player.position, Vec2::new(0.0, 160.0));
    }

    #[test]
    fn test_discard_policy_rejects_out_of_bounds() {
        let world = WorldGeometry::new(200.0, 200.0);
        let controller = MovementController::new(MovementPolicy::Discard);
        let mut player = player_at(2.0, 100.0);

        let outcome = controller.step(&mut player, &InputState::with_held(&[Direction::Left]), &world);
        assert_eq!(
            outcome,
            MoveOutcome::Blocked { candidate: Vec2::new(-3.0, 100.0), reason: BlockReason::OutOfBounds }
        );
        assert_eq!(player.position, Vec2::new(2.0, 100.0));
    }

    #[test]
    fn test_discard_policy_rejects_whole_move_on_collision() {
        let mut world = WorldGeometry::new(1000.0, 1000.0);
        // Wall directly to the right of the player
        world.add_obstacle(rect_points(0.0, 0.0, 20.0, 400.0), 142.0, 0.0);
        let controller = MovementController::new(MovementPolicy::Discard);

        let mut player = player_at(100.0, 100.0);
        let before = player.position;
        // Right would hit the wall; Down alone would be free. No sliding.
        let input = InputState::with_held(&[Direction::Right, Direction::Down]);
        let outcome = controller.step(&mut player, &input, &world);

        assert_eq!(player.position, before);
        assert!(matches!(
            outcome,
            MoveOutcome::Blocked { reason: BlockReason::Obstacle(0), .. }
        ));
    }

    #[test]
    fn test_discard_policy_allows_flush_contact() {
        let mut world = WorldGeometry::new(1000.0, 1000.0);
        world.add_obstacle(rect_points(0.0, 0.0, 20.0, 400.0), 145.0, 0.0);
        let controller = MovementController::new(MovementPolicy::Discard);

        let mut player = player_at(100.0, 100.0);
        controller.step(&mut player, &InputState::with_held(&[Direction::Right]), &world);
        // Right edge now exactly on the wall
        assert_eq!(player.position, Vec2::new(105.0, 100.0));
    }

    #[test]
    fn test_step_is_deterministic() {
        let world = WorldGeometry::new(1000.0, 1000.0);
        let controller = MovementController::new(MovementPolicy::Discard);
        let input = InputState::with_held(&[Direction::Down]);
        let mut a = player_at(10.0, 10.0);
        let mut b = player_at(10.0, 10.0);
        assert_eq!(controller.step(&mut a, &input, &world), controller.step(&mut b, &input, &world));
        assert_eq!(a, b);
    }
}
