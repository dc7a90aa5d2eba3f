//! Game simulation
//!
//! Per-tick order is fixed:
//! 1. Movement proposes a position from the held directions
//! 2. Collision approves or rejects it (obstacle variant)
//! 3. Movement commits
//! 4. Camera smooths toward the committed player
//! 5. The frame is handed to a `RenderSink`

pub mod camera;
pub mod collision;
pub mod movement;
pub mod player;
pub mod runtime;

pub use runtime::{FrameView, GameSession, RenderSink};
