//! World module - static level geometry
//!
//! - Fixed world bounds
//! - Convex obstacles with world-space offsets
//! - The built-in level used by the obstacle variant

mod geometry;
mod level;

pub use geometry::*;
pub use level::*;
