//! Player state

use macroquad::math::Vec2;

use crate::config::PlayerConfig;

/// The player-controlled square.
///
/// `position` is the top-left corner in world units. Only the movement
/// controller and a successful load write to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Vec2,
    /// Edge length of the square
    pub size: f32,
    /// Units per tick per held direction
    pub speed: f32,
    pub name: String,
    /// 0.0..=1.0, drawn as the HUD health bar
    pub health: f32,
}

impl Player {
    pub fn new(position: Vec2, size: f32, speed: f32) -> Self {
        Self {
            position,
            size,
            speed,
            name: "Player".to_string(),
            health: 1.0,
        }
    }

    pub fn from_config(config: &PlayerConfig) -> Self {
        Self {
            name: config.name.clone(),
            ..Self::new(Vec2::new(config.start_x, config.start_y), config.size, config.speed)
        }
    }

    /// Center of the square
    pub fn center(&self) -> Vec2 {
        self.position + Vec2::splat(self.size * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let p = Player::from_config(&PlayerConfig::default());
        assert_eq!(p.position, Vec2::new(400.0, 300.0));
        assert_eq!(p.size, 40.0);
        assert_eq!(p.speed, 5.0);
        assert_eq!(p.name, "Player");
        assert_eq!(p.health, 1.0);
        assert_eq!(p.center(), Vec2::new(420.0, 320.0));
    }
}
