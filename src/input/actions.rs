//! Input vocabulary
//!
//! Directions are held (level-triggered) and feed movement.
//! Actions are one-shot commands handled before the simulation step.

/// A held movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit step in world space (y grows downward)
    pub fn step(&self) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, -1.0),
            Direction::Down => (0.0, 1.0),
            Direction::Left => (-1.0, 0.0),
            Direction::Right => (1.0, 0.0),
        }
    }
}

/// One-shot commands (menu items in a desktop build)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Write the player position to the save file
    Save,
    /// Restore the player position from the save file
    Load,
    /// Switch to the next resolution preset
    CycleResolution,
    /// Save and exit
    Quit,
}
