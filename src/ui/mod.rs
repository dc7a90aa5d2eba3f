//! HUD building blocks
//!
//! Layout math only; drawing lives in `render`.

mod hud;
mod rect;

pub use hud::*;
pub use rect::Rect;
