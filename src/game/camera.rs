//! Follow camera
//!
//! The camera offset chases a target that centers the viewport on the
//! player, covering a fixed fraction of the remaining distance each tick:
//!
//! ```text
//! target  = clamp(player - viewport / 2, 0, world - viewport)
//! camera += (target - camera) * lerp_factor
//! ```
//!
//! With a fixed target and camera starting at 0 this gives
//! `camera_n = target * (1 - (1 - lerp)^n)`: no overshoot, visually settled
//! after a few dozen ticks.

use macroquad::math::Vec2;

use crate::config::ViewportSize;

/// Top-left corner of the visible area in world units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    pub offset: Vec2,
}

/// Clamp one camera axis so the viewport stays inside the world.
/// A world narrower than the viewport pins the camera at 0.
pub fn clamp_axis(value: f32, world_extent: f32, view_extent: f32) -> f32 {
    value.clamp(0.0, (world_extent - view_extent).max(0.0))
}

#[derive(Debug, Clone, Copy)]
pub struct CameraController {
    lerp_factor: f32,
    world_width: f32,
    world_height: f32,
}

impl CameraController {
    pub fn new(lerp_factor: f32, world_width: f32, world_height: f32) -> Self {
        Self {
            lerp_factor,
            world_width,
            world_height,
        }
    }

    /// Where the camera wants to be for this player position
    pub fn target(&self, player: Vec2, viewport: ViewportSize) -> Vec2 {
        self.clamp(
            Vec2::new(player.x - viewport.width / 2.0, player.y - viewport.height / 2.0),
            viewport,
        )
    }

    fn clamp(&self, offset: Vec2, viewport: ViewportSize) -> Vec2 {
        Vec2::new(
            clamp_axis(offset.x, self.world_width, viewport.width),
            clamp_axis(offset.y, self.world_height, viewport.height),
        )
    }

    /// Move the camera one tick toward its target.
    ///
    /// The result is clamped as well, so a camera left out of range by a
    /// viewport resize is pulled back in on the same tick.
    pub fn step(&self, camera: &mut Camera, player: Vec2, viewport: ViewportSize) {
        let target = self.target(player, viewport);
        let smoothed = camera.offset + (target - camera.offset) * self.lerp_factor;
        camera.offset = self.clamp(smoothed, viewport);
    }

    /// Jump straight to the target (after a load or respawn)
    pub fn snap(&self, camera: &mut Camera, player: Vec2, viewport: ViewportSize) {
        camera.offset = self.target(player, viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: ViewportSize = ViewportSize::new(800.0, 600.0);

    fn controller() -> CameraController {
        CameraController::new(0.1, 4000.0, 3000.0)
    }

    #[test]
    fn test_smoothing_sequence() {
        let controller = controller();
        let mut camera = Camera::default();
        // Target x = 1400 - 400 = 1000
        let player = Vec2::new(1400.0, 300.0);

        controller.step(&mut camera, player, VIEW);
        assert!((camera.offset.x - 100.0).abs() < 1e-3);
        controller.step(&mut camera, player, VIEW);
        assert!((camera.offset.x - 190.0).abs() < 1e-3);

        for n in 3..=40 {
            controller.step(&mut camera, player, VIEW);
            let expected = 1000.0 * (1.0 - 0.9f32.powi(n));
            assert!((camera.offset.x - expected).abs() < 1e-2, "tick {}", n);
            assert!(camera.offset.x < 1000.0);
        }
    }

    #[test]
    fn test_target_is_clamped() {
        let controller = controller();
        assert_eq!(controller.target(Vec2::new(10.0, 10.0), VIEW), Vec2::ZERO);
        assert_eq!(
            controller.target(Vec2::new(3990.0, 2990.0), VIEW),
            Vec2::new(3200.0, 2400.0)
        );
    }

    #[test]
    fn test_world_smaller_than_viewport_pins_to_zero() {
        let controller = CameraController::new(0.1, 500.0, 400.0);
        let mut camera = Camera::default();
        for _ in 0..10 {
            controller.step(&mut camera, Vec2::new(450.0, 350.0), VIEW);
            assert_eq!(camera.offset, Vec2::ZERO);
        }
    }

    #[test]
    fn test_resize_pulls_camera_back_in_range() {
        let controller = controller();
        let mut camera = Camera { offset: Vec2::new(3200.0, 2400.0) };
        // Viewport grew: max x is now 4000 - 1920 = 2080
        let big = ViewportSize::new(1920.0, 1080.0);
        controller.step(&mut camera, Vec2::new(3900.0, 2900.0), big);
        assert!(camera.offset.x <= 2080.0);
        assert!(camera.offset.y <= 1920.0);
    }

    #[test]
    fn test_snap() {
        let controller = controller();
        let mut camera = Camera::default();
        controller.snap(&mut camera, Vec2::new(2000.0, 1500.0), VIEW);
        assert_eq!(camera.offset, Vec2::new(1600.0, 1200.0));
    }

    #[test]
    fn test_never_overshoots() {
        let controller = CameraController::new(0.5, 4000.0, 3000.0);
        let mut camera = Camera::default();
        let player = Vec2::new(2400.0, 1800.0);
        let target = controller.target(player, VIEW);
        for _ in 0..100 {
            controller.step(&mut camera, player, VIEW);
            assert!(camera.offset.x <= target.x);
            assert!(camera.offset.y <= target.y);
        }
    }
}
