//! Save games
//!
//! A save is a JSON object with exactly two numbers:
//!
//! ```json
//! {"playerX":123.5,"playerY":67.25}
//! ```

use macroquad::math::Vec2;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{LocalStorage, StorageError};

/// On-disk save format.
///
/// Coordinates are kept as `f64` so files written by other tools with
/// double precision read back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaveGame {
    #[serde(rename = "playerX")]
    pub player_x: f64,
    #[serde(rename = "playerY")]
    pub player_y: f64,
}

impl SaveGame {
    pub fn new(player_x: f64, player_y: f64) -> Self {
        Self { player_x, player_y }
    }

    pub fn from_position(position: Vec2) -> Self {
        Self::new(f64::from(position.x), f64::from(position.y))
    }

    /// Position in simulation precision
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.player_x as f32, self.player_y as f32)
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, StorageError> {
        let save: SaveGame = serde_json::from_str(text)?;
        if !save.player_x.is_finite() || !save.player_y.is_finite() {
            return Err(StorageError::InvalidData("non-finite coordinate".into()));
        }
        Ok(save)
    }
}

/// A save file location
#[derive(Debug, Clone)]
pub struct SaveSlot {
    storage: LocalStorage,
    path: PathBuf,
}

impl SaveSlot {
    pub fn new(storage: LocalStorage, path: impl Into<PathBuf>) -> Self {
        Self {
            storage,
            path: path.into(),
        }
    }

    /// Slot at `path` relative to the working directory
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self::new(LocalStorage::new(), path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, save: &SaveGame) -> Result<(), StorageError> {
        let json = save.to_json()?;
        self.storage.write(&self.path, json.as_bytes())
    }

    pub fn read(&self) -> Result<SaveGame, StorageError> {
        let bytes = self.storage.read(&self.path)?;
        let text = String::from_utf8(bytes).map_err(|e| StorageError::SerdeError(e.to_string()))?;
        SaveGame::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_slot() -> (TempDir, SaveSlot) {
        let dir = TempDir::new().unwrap();
        let slot = SaveSlot::new(LocalStorage::with_base_dir(dir.path()), "save.json");
        (dir, slot)
    }

    #[test]
    fn test_round_trip_is_exact() {
        let (_dir, slot) = temp_slot();
        slot.write(&SaveGame::new(123.5, 67.25)).unwrap();
        let loaded = slot.read().unwrap();
        assert_eq!(loaded.player_x, 123.5);
        assert_eq!(loaded.player_y, 67.25);
    }

    #[test]
    fn test_double_precision_survives() {
        let save = SaveGame::from_json(r#"{"playerX": 123.456789012, "playerY": 0.1}"#).unwrap();
        assert_eq!(save.player_x, 123.456789012);
        let again = SaveGame::from_json(&save.to_json().unwrap()).unwrap();
        assert_eq!(again, save);
        assert!((save.position().x - 123.456_79).abs() < 1e-3);
    }

    #[test]
    fn test_field_names() {
        let json = SaveGame::new(1.5, 2.0).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["playerX"], 1.5);
        assert_eq!(object["playerY"], 2.0);
    }

    #[test]
    fn test_reads_integer_coordinates() {
        let save = SaveGame::from_json(r#"{"playerX": 400, "playerY": 300}"#).unwrap();
        assert_eq!(save, SaveGame::new(400.0, 300.0));
    }

    #[test]
    fn test_missing_file() {
        let (_dir, slot) = temp_slot();
        assert!(matches!(slot.read(), Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_malformed_file() {
        let (dir, slot) = temp_slot();
        std::fs::write(dir.path().join("save.json"), "{\"playerX\": \"left\"}").unwrap();
        assert!(matches!(slot.read(), Err(StorageError::SerdeError(_))));

        std::fs::write(dir.path().join("save.json"), "{\"playerX\": 1.0}").unwrap();
        assert!(matches!(slot.read(), Err(StorageError::SerdeError(_))));

        std::fs::write(dir.path().join("save.json"), [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(slot.read(), Err(StorageError::SerdeError(_))));
    }

    #[test]
    fn test_extra_fields_rejected() {
        let result = SaveGame::from_json(r#"{"playerX": 1, "playerY": 2, "health": 1}"#);
        assert!(matches!(result, Err(StorageError::SerdeError(_))));
    }
}
