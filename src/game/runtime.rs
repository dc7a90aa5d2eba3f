//! Game Runtime
//!
//! `GameSession` owns the whole simulation and runs one tick at a time:
//! movement (with its collision check), then the camera, then hands a
//! read-only `FrameView` to whatever draws the frame.

use macroquad::math::Vec2;
use tracing::{debug, info, warn};

use super::camera::{Camera, CameraController};
use super::collision::CollisionDetector;
use super::movement::{MoveOutcome, MovementController, MovementPolicy};
use super::player::Player;
use crate::config::{ConfigError, GameConfig, ViewportSize};
use crate::input::InputState;
use crate::storage::{SaveGame, SaveSlot, StorageError};
use crate::world::{create_world, Obstacle, WorldGeometry};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub player: &'a Player,
    pub camera: Camera,
    pub viewport: ViewportSize,
    pub world_width: f32,
    pub world_height: f32,
    pub obstacles: &'a [Obstacle],
}

impl FrameView<'_> {
    /// Player's top-left corner in screen space
    pub fn player_on_screen(&self) -> Vec2 {
        self.player.position - self.camera.offset
    }
}

/// Receives the committed state at the end of each tick
pub trait RenderSink {
    fn draw(&mut self, frame: &FrameView<'_>);
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub tick: u64,
    pub movement: MoveOutcome,
    pub camera: Vec2,
}

pub struct GameSession {
    world: WorldGeometry,
    player: Player,
    camera: Camera,
    movement: MovementController,
    camera_controller: CameraController,
    tick: u64,
}

impl GameSession {
    /// Build a session with the built-in world for the configured variant
    pub fn new(config: &GameConfig) -> Self {
        Self::with_world(config, create_world(config))
    }

    /// Build a session around an existing world
    pub fn with_world(config: &GameConfig, world: WorldGeometry) -> Self {
        let camera_controller =
            CameraController::new(config.camera.lerp_factor, world.width(), world.height());
        Self {
            player: Player::from_config(&config.player),
            camera: Camera::default(),
            movement: MovementController::new(MovementPolicy::for_variant(config.variant)),
            camera_controller,
            world,
            tick: 0,
        }
    }

    /// Validate `config`, then make sure the spawn point is clear in the
    /// world the variant builds
    pub fn check_config(config: &GameConfig) -> Result<(), ConfigError> {
        config.validate()?;
        let world = create_world(config);
        let (x, y) = (config.player.start_x, config.player.start_y);
        if CollisionDetector::new(&world, config.player.size).would_collide(x, y) {
            return Err(ConfigError::StartInsideObstacle { x, y });
        }
        Ok(())
    }

    pub fn world(&self) -> &WorldGeometry {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    #[cfg(test)]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn policy(&self) -> MovementPolicy {
        self.movement.policy()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Run one simulation step: movement first, then the camera
    pub fn tick(&mut self, input: &InputState, viewport: ViewportSize) -> TickReport {
        self.tick += 1;

        let movement = self.movement.step(&mut self.player, input, &self.world);
        if let MoveOutcome::Blocked { candidate, reason } = movement {
            debug!(tick = self.tick, x = candidate.x, y = candidate.y, ?reason, "move_blocked");
        }

        self.camera_controller
            .step(&mut self.camera, self.player.position, viewport);

        TickReport {
            tick: self.tick,
            movement,
            camera: self.camera.offset,
        }
    }

    /// Tick, then draw
    pub fn frame(&mut self, input: &InputState, viewport: ViewportSize, sink: &mut impl RenderSink) -> TickReport {
        let report = self.tick(input, viewport);
        sink.draw(&self.view(viewport));
        report
    }

    pub fn view(&self, viewport: ViewportSize) -> FrameView<'_> {
        FrameView {
            player: &self.player,
            camera: self.camera,
            viewport,
            world_width: self.world.width(),
            world_height: self.world.height(),
            obstacles: self.world.obstacles(),
        }
    }

    /// Write the player position to `slot`. Failures are logged and returned.
    pub fn save(&self, slot: &SaveSlot) -> Result<(), StorageError> {
        let save = SaveGame::from_position(self.player.position);
        match slot.write(&save) {
            Ok(()) => {
                info!(path = %slot.path().display(), x = save.player_x, y = save.player_y, "game_saved");
                Ok(())
            }
            Err(e) => {
                warn!(path = %slot.path().display(), error = %e, "save_failed");
                Err(e)
            }
        }
    }

    /// Restore the player position from `slot`.
    ///
    /// On any failure the player stays where it is. A position outside the
    /// world, or (with obstacles) inside one, counts as invalid data.
    pub fn load(&mut self, slot: &SaveSlot, viewport: ViewportSize) -> Result<(), StorageError> {
        let result = slot.read().and_then(|save| self.validate_save(&save).map(|_| save));
        match result {
            Ok(save) => {
                self.player.position = save.position();
                self.camera_controller
                    .snap(&mut self.camera, self.player.position, viewport);
                info!(path = %slot.path().display(), x = save.player_x, y = save.player_y, "game_loaded");
                Ok(())
            }
            Err(e) => {
                warn!(path = %slot.path().display(), error = %e, "load_failed");
                Err(e)
            }
        }
    }

    fn validate_save(&self, save: &SaveGame) -> Result<(), StorageError> {
        let size = self.player.size;
        let position = save.position();
        if !self.world.contains_square(position.x, position.y, size) {
            return Err(StorageError::InvalidData(format!(
                "position ({}, {}) is outside the world",
                save.player_x, save.player_y
            )));
        }
        if self.movement.policy() == MovementPolicy::Discard
            && CollisionDetector::new(&self.world, size).would_collide(position.x, position.y)
        {
            return Err(StorageError::InvalidData(format!(
                "position ({}, {}) overlaps an obstacle",
                save.player_x, save.player_y
            )));
        }
        Ok(())
    }
}
