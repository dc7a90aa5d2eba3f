//! Input handling
//!
//! Keyboard events are collected into a queue by `KeyboardSource` and
//! drained once per tick into an `InputState` snapshot. Movement reads the
//! snapshot; one-shot commands (save, load, resolution, quit) come back
//! from the drain for the frame loop to run.

mod actions;
mod keyboard;
mod state;

pub use actions::*;
pub use keyboard::KeyboardSource;
pub use state::*;
