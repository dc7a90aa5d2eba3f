//! Collision System
//!
//! The player is an axis-aligned square tested against the world's convex
//! obstacles with the separating axis theorem. Each obstacle's bounding box
//! is checked first so distant shapes are rejected without projecting.
//!
//! Touching is not colliding: projections that only share an endpoint
//! count as separated, so the player can stand flush against a wall.

use macroquad::math::Vec2;

use crate::world::{Aabb, WorldGeometry};

/// Four corners of the player square at (x, y)
pub fn player_box(x: f32, y: f32, size: f32) -> [Vec2; 4] {
    [
        Vec2::new(x, y),
        Vec2::new(x + size, y),
        Vec2::new(x + size, y + size),
        Vec2::new(x, y + size),
    ]
}

/// SAT intersection test for two convex polygons.
///
/// Polygons with fewer than three vertices never intersect anything.
/// Winding order doesn't matter.
pub fn polygons_intersect(a: &[Vec2], b: &[Vec2]) -> bool {
    if a.len() < 3 || b.len() < 3 {
        return false;
    }
    !has_separating_axis(a, b) && !has_separating_axis(b, a)
}

/// Test the edge normals of `edges_of` as candidate separating axes
fn has_separating_axis(edges_of: &[Vec2], other: &[Vec2]) -> bool {
    let n = edges_of.len();
    for i in 0..n {
        let edge = edges_of[(i + 1) % n] - edges_of[i];
        // Repeated vertex
        if edge.length_squared() == 0.0 {
            continue;
        }
        // Unnormalized is fine: both intervals scale by the same factor
        let axis = edge.perp();
        let (min_a, max_a) = project(edges_of, axis);
        let (min_b, max_b) = project(other, axis);
        if max_a <= min_b || max_b <= min_a {
            return true;
        }
    }
    false
}

/// Project all points onto `axis`, returning the (min, max) interval
fn project(points: &[Vec2], axis: Vec2) -> (f32, f32) {
    points.iter().fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), p| {
        let d = p.dot(axis);
        (min.min(d), max.max(d))
    })
}

/// Answers "would the player overlap anything at this position?"
///
/// Borrows the world; never owns obstacles.
#[derive(Debug, Clone, Copy)]
pub struct CollisionDetector<'a> {
    world: &'a WorldGeometry,
    player_size: f32,
}

impl<'a> CollisionDetector<'a> {
    pub fn new(world: &'a WorldGeometry, player_size: f32) -> Self {
        Self { world, player_size }
    }

    /// True if the player box at the candidate position intersects any obstacle
    pub fn would_collide(&self, candidate_x: f32, candidate_y: f32) -> bool {
        self.first_hit(candidate_x, candidate_y).is_some()
    }

    /// Index of the first obstacle hit at the candidate position
    pub fn first_hit(&self, candidate_x: f32, candidate_y: f32) -> Option<usize> {
        let corners = player_box(candidate_x, candidate_y, self.player_size);
        let bounds = Aabb::square(candidate_x, candidate_y, self.player_size);

        self.world.obstacles().iter().position(|obstacle| {
            obstacle.bounds().overlaps(&bounds)
                && polygons_intersect(&corners, obstacle.world_points())
        })
    }
}
