//! Geometric transforms: flips and quarter-turn rotations.
//!
//! These operations only move pixels; no channel value is ever changed.
//!
//! # Coordinate System
//!
//! - Grids are indexed `[row][col]`
//! - Origin is the top-left corner
//! - Rotations swap width and height

mod flip;
mod rotate;

pub use flip::{flip_horizontal, flip_vertical};
pub use rotate::{rotate_left, rotate_right};
