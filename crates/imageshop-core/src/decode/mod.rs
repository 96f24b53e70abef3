//! Loading images into grids.
//!
//! This module provides functionality for:
//! - Decoding PNG and JPEG bytes into a [`Grid`](crate::Grid)
//! - Reading the EXIF orientation tag and applying it with the engine's own
//!   flips and rotations, so every loaded grid is upright
//!
//! # Examples
//!
//! ```ignore
//! use imageshop_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let grid = decode_image(&bytes).unwrap();
//! println!("Loaded {}x{} image", grid.width(), grid.height());
//! ```

mod reader;
mod types;

pub use reader::{apply_orientation, decode_image, decode_image_no_orientation};
pub use types::{DecodeError, Orientation, MAX_DECODE_DIMENSION};
