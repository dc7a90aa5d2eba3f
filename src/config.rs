//! Game configuration
//!
//! Everything that used to be a hard-coded constant lives here: world bounds,
//! player size and speed, the camera smoothing factor, the initial viewport
//! and where the save file goes. Values are fixed for the lifetime of the
//! process once `main` has built them.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::PathBuf;

/// Which flavour of the demo to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Empty world, movement is clamped to the bounds
    Open,
    /// World with static polygon obstacles, blocked moves are discarded
    #[default]
    Obstacles,
}

impl Variant {
    pub fn label(&self) -> &'static str {
        match self {
            Variant::Open => "open",
            Variant::Obstacles => "obstacles",
        }
    }
}

/// Width/height of the visible area in world units
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Deserialize a present value as `Some`, so RON can write `width: 2000.0`
/// instead of `width: Some(2000.0)`
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// World bounds. Anything left out is taken from the variant's built-in size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    #[serde(deserialize_with = "present")]
    pub width: Option<f32>,
    #[serde(deserialize_with = "present")]
    pub height: Option<f32>,
}

impl WorldConfig {
    /// Built-in world size for a variant
    pub fn default_size(variant: Variant) -> (f32, f32) {
        match variant {
            Variant::Open => (2000.0, 2000.0),
            Variant::Obstacles => (4000.0, 3000.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Edge length of the player square
    pub size: f32,
    /// Units moved per tick per held direction
    pub speed: f32,
    pub start_x: f32,
    pub start_y: f32,
    /// Shown in the HUD label
    pub name: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            size: 40.0,
            speed: 5.0,
            start_x: 400.0,
            start_y: 300.0,
            name: "Player".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Fraction of the remaining distance covered each tick
    pub lerp_factor: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { lerp_factor: 0.1 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MinimapConfig {
    pub width: f32,
    pub height: f32,
    /// Distance of the minimap's left edge from the right edge of the screen
    pub right_inset: f32,
    pub top_inset: f32,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 150.0,
            right_inset: 210.0,
            top_inset: 10.0,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub variant: Variant,
    pub world: WorldConfig,
    pub player: PlayerConfig,
    pub camera: CameraConfig,
    pub viewport: ViewportSize,
    pub minimap: MinimapConfig,
    pub save_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_variant(Variant::default())
    }
}

impl GameConfig {
    /// Defaults for a given variant. The open world is the smaller 2000x2000 map.
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            variant,
            world: WorldConfig::default(),
            player: PlayerConfig::default(),
            camera: CameraConfig::default(),
            viewport: ViewportSize::default(),
            minimap: MinimapConfig::default(),
            save_path: PathBuf::from("save.json"),
        }
    }

    /// Parse a RON config document
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// World size after filling gaps from the variant
    pub fn world_size(&self) -> (f32, f32) {
        let (width, height) = WorldConfig::default_size(self.variant);
        (
            self.world.width.unwrap_or(width),
            self.world.height.unwrap_or(height),
        )
    }

    /// Reject values the simulation can't work with.
    ///
    /// This only looks at the numbers. Whether the spawn point is clear of
    /// obstacles depends on the built world, see `GameSession::check_config`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (world_width, world_height) = self.world_size();
        let positive = [
            ("world.width", world_width),
            ("world.height", world_height),
            ("player.size", self.player.size),
            ("viewport.width", self.viewport.width),
            ("viewport.height", self.viewport.height),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        if !(self.player.speed >= 0.0) {
            return Err(ConfigError::NotPositive { field: "player.speed", value: self.player.speed });
        }
        let lerp = self.camera.lerp_factor;
        if !(lerp > 0.0 && lerp <= 1.0) {
            return Err(ConfigError::LerpOutOfRange(lerp));
        }
        if self.player.size > world_width || self.player.size > world_height {
            return Err(ConfigError::PlayerLargerThanWorld);
        }
        let (max_x, max_y) = self.player_max();
        let (x, y) = (self.player.start_x, self.player.start_y);
        if !(0.0..=max_x).contains(&x) || !(0.0..=max_y).contains(&y) {
            return Err(ConfigError::StartOutOfBounds { x, y });
        }
        Ok(())
    }

    /// Largest valid player coordinate on each axis
    pub fn player_max(&self) -> (f32, f32) {
        let (width, height) = self.world_size();
        (width - self.player.size, height - self.player.size)
    }
}

/// Configuration error types
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// RON syntax or type error
    Parse(String),
    /// A size that must be greater than zero isn't
    NotPositive { field: &'static str, value: f32 },
    /// Camera lerp factor outside (0, 1]
    LerpOutOfRange(f32),
    /// The player square doesn't fit inside the world
    PlayerLargerThanWorld,
    /// Spawn point puts part of the player outside the world
    StartOutOfBounds { x: f32, y: f32 },
    /// Spawn point overlaps an obstacle
    StartInsideObstacle { x: f32, y: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "config parse error: {}", msg),
            ConfigError::NotPositive { field, value } => {
                write!(f, "{} must be positive (got {})", field, value)
            }
            ConfigError::LerpOutOfRange(v) => {
                write!(f, "camera.lerp_factor must be in (0, 1] (got {})", v)
            }
            ConfigError::PlayerLargerThanWorld => write!(f, "player does not fit inside the world"),
            ConfigError::StartOutOfBounds { x, y } => {
                write!(f, "player start ({}, {}) is outside the world", x, y)
            }
            ConfigError::StartInsideObstacle { x, y } => {
                write!(f, "player start ({}, {}) overlaps an obstacle", x, y)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_constants() {
        let c = GameConfig::default();
        assert_eq!(c.variant, Variant::Obstacles);
        assert_eq!(c.world_size(), (4000.0, 3000.0));
        assert_eq!(c.player.size, 40.0);
        assert_eq!(c.player.speed, 5.0);
        assert!((c.camera.lerp_factor - 0.1).abs() < 1e-6);
        assert_eq!(c.save_path, PathBuf::from("save.json"));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_open_variant_uses_smaller_world() {
        let c = GameConfig::for_variant(Variant::Open);
        assert_eq!(c.world_size(), (2000.0, 2000.0));
    }

    #[test]
    fn test_partial_ron_fills_defaults() {
        let c = GameConfig::from_ron("(variant: open, player: (speed: 8.0))").unwrap();
        assert_eq!(c.variant, Variant::Open);
        assert_eq!(c.player.speed, 8.0);
        assert_eq!(c.player.size, 40.0);
        assert_eq!(c.world_size(), (2000.0, 2000.0));
    }

    #[test]
    fn test_world_follows_variant_set_after_parsing() {
        let mut c = GameConfig::from_ron("(player: (speed: 8.0))").unwrap();
        assert_eq!(c.world_size(), (4000.0, 3000.0));
        c.variant = Variant::Open;
        assert_eq!(c.world_size(), (2000.0, 2000.0));
        assert_eq!(c.player_max(), (1960.0, 1960.0));
    }

    #[test]
    fn test_partial_world_section_fills_from_variant() {
        let c = GameConfig::from_ron("(variant: open, world: (height: 900.0))").unwrap();
        assert_eq!(c.world_size(), (2000.0, 900.0));

        let c = GameConfig::from_ron("(world: (width: 5000.0, height: 3500.0))").unwrap();
        assert_eq!(c.world, WorldConfig { width: Some(5000.0), height: Some(3500.0) });
        assert_eq!(c.world_size(), (5000.0, 3500.0));
    }

    #[test]
    fn test_rejects_bad_lerp() {
        let mut c = GameConfig::default();
        c.camera.lerp_factor = 0.0;
        assert_eq!(c.validate(), Err(ConfigError::LerpOutOfRange(0.0)));
        c.camera.lerp_factor = 1.5;
        assert!(c.validate().is_err());
        c.camera.lerp_factor = 1.0;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_rejects_oversized_player() {
        let mut c = GameConfig::default();
        c.world.height = Some(30.0);
        assert_eq!(c.validate(), Err(ConfigError::PlayerLargerThanWorld));
    }

    #[test]
    fn test_rejects_start_outside_world() {
        let mut c = GameConfig::for_variant(Variant::Open);
        c.player.start_x = 1990.0;
        assert_eq!(c.validate(), Err(ConfigError::StartOutOfBounds { x: 1990.0, y: 300.0 }));
        c.player.start_x = 1960.0;
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(GameConfig::from_ron("not ron at all ("), Err(ConfigError::Parse(_))));
        assert!(matches!(
            GameConfig::from_ron("(world: (width: -5.0))"),
            Err(ConfigError::NotPositive { field: "world.width", .. })
        ));
    }
}
