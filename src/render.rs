//! Frame rendering
//!
//! Draws a `FrameView` with macroquad's immediate-mode 2D API: ground and
//! grid, obstacles, the player, then the HUD (name, health bar, minimap).
//! Nothing here feeds back into the simulation.

use macroquad::prelude::*;

use crate::config::MinimapConfig;
use crate::game::{FrameView, RenderSink};
use crate::ui::{HudLayout, MinimapProjection, Rect, LABEL_FONT_SIZE};
use crate::world::Obstacle;

/// World units between grid lines
pub const GRID_SPACING: f32 = 100.0;

const BACKDROP: Color = Color::new(0.08, 0.08, 0.10, 1.0);
const GROUND: Color = Color::new(0.18, 0.45, 0.20, 1.0);
const GRID_LINE: Color = Color::new(0.0, 0.0, 0.0, 0.15);
const PLAYER: Color = RED;
const MINIMAP_BG: Color = Color::new(0.25, 0.25, 0.25, 0.9);
const MINIMAP_PLAYER: Color = BLUE;
const HEALTH_BG: Color = Color::new(0.2, 0.2, 0.2, 0.8);
const HEALTH_FILL: Color = Color::new(0.2, 0.75, 0.3, 1.0);

fn obstacle_color(o: &Obstacle) -> Color {
    let [r, g, b] = o.color();
    Color::from_rgba(r, g, b, 255)
}

/// World coordinates of the grid lines crossing `[start, start + extent)`
pub fn grid_lines(start: f32, extent: f32, world_extent: f32) -> impl Iterator<Item = f32> {
    let first = (start.max(0.0) / GRID_SPACING).ceil() as u32;
    let end = (start + extent).min(world_extent);
    (first..)
        .map(|i| i as f32 * GRID_SPACING)
        .take_while(move |x| *x <= end)
}

/// Draws frames to the macroquad window
pub struct MacroquadRenderer {
    minimap: MinimapConfig,
    show_grid: bool,
}

impl MacroquadRenderer {
    pub fn new(minimap: MinimapConfig) -> Self {
        Self {
            minimap,
            show_grid: true,
        }
    }

    fn draw_world(&self, frame: &FrameView<'_>) {
        let cam = frame.camera.offset;
        clear_background(BACKDROP);
        draw_rectangle(-cam.x, -cam.y, frame.world_width, frame.world_height, GROUND);

        if self.show_grid {
            let top = (-cam.y).max(0.0);
            let bottom = (frame.world_height - cam.y).min(frame.viewport.height);
            for x in grid_lines(cam.x, frame.viewport.width, frame.world_width) {
                draw_line(x - cam.x, top, x - cam.x, bottom, 1.0, GRID_LINE);
            }
            let left = (-cam.x).max(0.0);
            let right = (frame.world_width - cam.x).min(frame.viewport.width);
            for y in grid_lines(cam.y, frame.viewport.height, frame.world_height) {
                draw_line(left, y - cam.y, right, y - cam.y, 1.0, GRID_LINE);
            }
        }

        let view = Rect::new(cam.x, cam.y, frame.viewport.width, frame.viewport.height);
        for obstacle in frame.obstacles {
            let b = obstacle.bounds();
            let bounds = Rect::new(b.min.x, b.min.y, b.width(), b.height());
            let visible = view.clip(&bounds);
            if visible.w <= 0.0 || visible.h <= 0.0 {
                continue;
            }
            draw_obstacle(obstacle, cam);
        }

        let p = frame.player_on_screen();
        draw_rectangle(p.x, p.y, frame.player.size, frame.player.size, PLAYER);
    }

    fn draw_hud(&self, frame: &FrameView<'_>, layout: &HudLayout) {
        let label = layout.name_label;
        draw_text(&frame.player.name, label.x, label.y + LABEL_FONT_SIZE, LABEL_FONT_SIZE, WHITE);

        let bar = layout.health_bar;
        draw_rectangle(bar.x, bar.y, bar.w, bar.h, HEALTH_BG);
        let fill = bar.pad(2.0).fraction_w(frame.player.health);
        draw_rectangle(fill.x, fill.y, fill.w, fill.h, HEALTH_FILL);
    }

    fn draw_minimap(&self, frame: &FrameView<'_>, map: Rect) {
        draw_rectangle(map.x, map.y, map.w, map.h, MINIMAP_BG);
        let proj = MinimapProjection::new(map, frame.world_width, frame.world_height);

        for obstacle in frame.obstacles {
            let b = obstacle.bounds();
            let r = proj.rect(b.min.x, b.min.y, b.width(), b.height());
            draw_rectangle(r.x, r.y, r.w.max(1.0), r.h.max(1.0), obstacle_color(obstacle));
        }

        let cam = frame.camera.offset;
        let view = proj
            .rect(cam.x, cam.y, frame.viewport.width, frame.viewport.height)
            .clip(&map);
        draw_rectangle_lines(view.x, view.y, view.w, view.h, 1.0, WHITE);

        let dot = proj.point(frame.player.center());
        draw_circle(dot.x, dot.y, 2.5, MINIMAP_PLAYER);
    }
}

/// Convex polygon as a triangle fan plus outline
fn draw_obstacle(obstacle: &Obstacle, cam: Vec2) {
    let pts: Vec<Vec2> = obstacle.world_points().iter().map(|p| *p - cam).collect();
    if pts.len() < 3 {
        return;
    }
    let color = obstacle_color(obstacle);
    for i in 1..pts.len() - 1 {
        draw_triangle(pts[0], pts[i], pts[i + 1], color);
    }
    for i in 0..pts.len() {
        let a = pts[i];
        let b = pts[(i + 1) % pts.len()];
        draw_line(a.x, a.y, b.x, b.y, 2.0, BLACK);
    }
}

impl RenderSink for MacroquadRenderer {
    fn draw(&mut self, frame: &FrameView<'_>) {
        let layout = HudLayout::for_viewport(frame.viewport, &self.minimap);
        self.draw_world(frame);
        self.draw_hud(frame, &layout);
        self.draw_minimap(frame, layout.minimap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_lines_cover_visible_range() {
        let lines: Vec<f32> = grid_lines(150.0, 300.0, 4000.0).collect();
        assert_eq!(lines, vec![200.0, 300.0, 400.0]);
    }

    #[test]
    fn test_grid_lines_stop_at_world_edge() {
        let lines: Vec<f32> = grid_lines(0.0, 800.0, 250.0).collect();
        assert_eq!(lines, vec![0.0, 100.0, 200.0]);
    }
}
