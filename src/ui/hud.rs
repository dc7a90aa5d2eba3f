//! HUD layout
//!
//! Positions for the name label, health bar and minimap, recomputed from
//! the viewport every frame so they follow window resizes.

use macroquad::math::Vec2;

use super::Rect;
use crate::config::{MinimapConfig, ViewportSize};

pub const HEALTH_BAR_WIDTH: f32 = 200.0;
pub const HEALTH_BAR_HEIGHT: f32 = 16.0;
pub const LABEL_FONT_SIZE: f32 = 16.0;

/// Screen-space rectangles for every HUD element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudLayout {
    /// Top-left of the name label
    pub name_label: Rect,
    pub health_bar: Rect,
    pub minimap: Rect,
}

impl HudLayout {
    pub fn for_viewport(viewport: ViewportSize, minimap: &MinimapConfig) -> Self {
        let w = viewport.width;
        let h = viewport.height;
        Self {
            name_label: Rect::new(w * 0.02, h * 0.02, HEALTH_BAR_WIDTH, LABEL_FONT_SIZE),
            health_bar: Rect::new(w * 0.02, h * 0.05, HEALTH_BAR_WIDTH, HEALTH_BAR_HEIGHT),
            minimap: Rect::new(
                w - minimap.right_inset,
                minimap.top_inset,
                minimap.width,
                minimap.height,
            ),
        }
    }
}

/// Maps world coordinates into the minimap rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimapProjection {
    origin: Vec2,
    scale: Vec2,
}

impl MinimapProjection {
    pub fn new(minimap: Rect, world_width: f32, world_height: f32) -> Self {
        Self {
            origin: Vec2::new(minimap.x, minimap.y),
            scale: Vec2::new(minimap.w / world_width, minimap.h / world_height),
        }
    }

    pub fn point(&self, world: Vec2) -> Vec2 {
        self.origin + world * self.scale
    }

    /// World-space rectangle to minimap space
    pub fn rect(&self, x: f32, y: f32, w: f32, h: f32) -> Rect {
        let p = self.point(Vec2::new(x, y));
        Rect::new(p.x, p.y, w * self.scale.x, h * self.scale.y)
    }
}
