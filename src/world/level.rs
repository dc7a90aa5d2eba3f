//! Built-in level data
//!
//! The obstacle variant ships with one hand-placed level. Every shape is
//! convex and kept clear of the default spawn point at (400, 300).

use std::f32::consts::FRAC_PI_4;

use macroquad::math::Vec2;

use super::geometry::{rect_points, regular_polygon, WorldGeometry};
use crate::config::{GameConfig, Variant};

/// Build the world for the configured variant
pub fn create_world(config: &GameConfig) -> WorldGeometry {
    match config.variant {
        Variant::Open => create_empty_world(config),
        Variant::Obstacles => create_obstacle_world(config),
    }
}

/// Bounds only, no obstacles
pub fn create_empty_world(config: &GameConfig) -> WorldGeometry {
    let (width, height) = config.world_size();
    WorldGeometry::new(width, height)
}

/// The default obstacle course
pub fn create_obstacle_world(config: &GameConfig) -> WorldGeometry {
    let mut world = create_empty_world(config);

    // Walls
    world.add_colored_obstacle(rect_points(0.0, 0.0, 600.0, 40.0), 800.0, 500.0, [120, 110, 100]);
    world.add_colored_obstacle(rect_points(0.0, 0.0, 60.0, 500.0), 1800.0, 200.0, [120, 110, 100]);

    // Diamond (square standing on a corner)
    world.add_colored_obstacle(regular_polygon(4, 120.0, 0.0), 1200.0, 1200.0, [70, 90, 140]);

    // Square rotated by 30 degrees
    world.add_colored_obstacle(
        regular_polygon(4, 100.0, FRAC_PI_4 + 30f32.to_radians()),
        2600.0,
        800.0,
        [70, 90, 140],
    );

    // Rock
    world.add_colored_obstacle(
        vec![Vec2::new(0.0, 0.0), Vec2::new(300.0, 0.0), Vec2::new(150.0, -260.0)],
        600.0,
        1800.0,
        [100, 100, 100],
    );

    // Pond
    world.add_colored_obstacle(regular_polygon(6, 150.0, 0.0), 3000.0, 2000.0, [50, 100, 170]);

    // Slanted fence
    world.add_colored_obstacle(
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(500.0, 200.0),
            Vec2::new(480.0, 250.0),
            Vec2::new(-20.0, 50.0),
        ],
        2000.0,
        2400.0,
        [140, 100, 60],
    );

    world
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::collision::CollisionDetector;

    #[test]
    fn test_open_world_is_empty() {
        let config = GameConfig::for_variant(Variant::Open);
        let world = create_world(&config);
        assert!(world.obstacles().is_empty());
        assert_eq!(world.width(), 2000.0);
    }

    #[test]
    fn test_obstacles_fit_inside_world() {
        let config = GameConfig::default();
        let world = create_world(&config);
        assert!(!world.obstacles().is_empty());
        for o in world.obstacles() {
            let b = o.bounds();
            assert!(b.min.x >= 0.0 && b.min.y >= 0.0);
            assert!(b.max.x <= world.width() && b.max.y <= world.height());
        }
    }

    #[test]
    fn test_spawn_point_is_clear() {
        let config = GameConfig::default();
        let world = create_world(&config);
        let detector = CollisionDetector::new(&world, config.player.size);
        assert!(!detector.would_collide(config.player.start_x, config.player.start_y));
    }
}
