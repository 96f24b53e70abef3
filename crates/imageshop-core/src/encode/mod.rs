//! Saving grids as image files.
//!
//! Grids are written as lossless RGBA PNG so transparency produced by the
//! green screen operation survives a save and reload.
//!
//! # Examples
//!
//! ```ignore
//! use imageshop_core::encode::encode_png;
//!
//! let png_bytes = encode_png(&grid).unwrap();
//! std::fs::write("edited.png", png_bytes).unwrap();
//! ```

mod png;

pub use png::{encode_png, EncodeError};
