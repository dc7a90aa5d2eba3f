//! Static world geometry
//!
//! The world is a fixed rectangle holding a list of convex obstacles.
//! Obstacles are given in local coordinates plus a world-space offset and
//! keep only their translated vertices and bounding box, both computed
//! once at construction.

use macroquad::math::Vec2;

/// RGB color used when drawing an obstacle
pub type ObstacleColor = [u8; 3];

pub const DEFAULT_OBSTACLE_COLOR: ObstacleColor = [110, 90, 70];

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box of a square with its top-left corner at (x, y)
    pub fn square(x: f32, y: f32, size: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(x + size, y + size))
    }

    /// Smallest box containing all points. Empty input gives a zero box at the origin.
    pub fn from_points(points: &[Vec2]) -> Self {
        let Some(first) = points.first() else {
            return Self::new(Vec2::ZERO, Vec2::ZERO);
        };
        let (min, max) = points.iter().fold((*first, *first), |(min, max), p| {
            (min.min(*p), max.max(*p))
        });
        Self::new(min, max)
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Strict overlap: boxes that only share an edge don't overlap
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// A static convex polygon placed in the world
#[derive(Debug, Clone)]
pub struct Obstacle {
    color: ObstacleColor,
    /// Local vertices translated by the placement offset, in drawing order
    world_points: Vec<Vec2>,
    bounds: Aabb,
}

impl Obstacle {
    pub fn new(points: Vec<Vec2>, offset: Vec2, color: ObstacleColor) -> Self {
        let world_points: Vec<Vec2> = points.iter().map(|p| *p + offset).collect();
        let bounds = Aabb::from_points(&world_points);
        Self {
            color,
            world_points,
            bounds,
        }
    }

    pub fn color(&self) -> ObstacleColor {
        self.color
    }

    /// Vertices translated into world space
    pub fn world_points(&self) -> &[Vec2] {
        &self.world_points
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }
}

/// World bounds plus the obstacle list. Content is fixed once the level is built.
#[derive(Debug, Clone)]
pub struct WorldGeometry {
    width: f32,
    height: f32,
    obstacles: Vec<Obstacle>,
}

impl WorldGeometry {
    /// Create an empty world of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            obstacles: Vec::new(),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Store an obstacle with the default color
    #[allow(dead_code)]
    pub fn add_obstacle(&mut self, points: Vec<Vec2>, offset_x: f32, offset_y: f32) {
        self.add_colored_obstacle(points, offset_x, offset_y, DEFAULT_OBSTACLE_COLOR);
    }

    pub fn add_colored_obstacle(
        &mut self,
        points: Vec<Vec2>,
        offset_x: f32,
        offset_y: f32,
        color: ObstacleColor,
    ) {
        self.obstacles
            .push(Obstacle::new(points, Vec2::new(offset_x, offset_y), color));
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Does a square of `size` at (x, y) lie fully inside the world?
    pub fn contains_square(&self, x: f32, y: f32, size: f32) -> bool {
        x >= 0.0 && y >= 0.0 && x <= self.width - size && y <= self.height - size
    }
}

/// Four corners of an axis-aligned rectangle, clockwise in screen space
pub fn rect_points(x: f32, y: f32, w: f32, h: f32) -> Vec<Vec2> {
    vec![
        Vec2::new(x, y),
        Vec2::new(x + w, y),
        Vec2::new(x + w, y + h),
        Vec2::new(x, y + h),
    ]
}

/// Regular polygon centered on the origin. `rotation` is in radians.
pub fn regular_polygon(sides: usize, radius: f32, rotation: f32) -> Vec<Vec2> {
    (0..sides)
        .map(|i| {
            let angle = rotation + i as f32 * std::f32::consts::TAU / sides as f32;
            Vec2::new(angle.cos() * radius, angle.sin() * radius)
        })
        .collect()
}
