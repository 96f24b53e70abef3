//! ImageShop Core - Pixel-transform engine
//!
//! This crate provides the image editing operations behind ImageShop: flips,
//! quarter-turn rotations, grayscale, green screen keying and histogram
//! equalization, plus the helpers a shell needs to load, overlay and save
//! images.
//!
//! # Module Structure
//!
//! - `pixel` - Packed ARGB pixel values
//! - `grid` - The rectangular pixel container and its errors
//! - `luminosity` - Perceptual brightness of a pixel
//! - `histogram` - Luminosity histograms
//! - `transform` - Flips and rotations
//! - `adjustments` - Grayscale and green screen
//! - `equalize` - Histogram equalization
//! - `operation` - Named operations and dispatch
//! - `overlay` - Centered alpha compositing of two grids
//! - `decode` / `encode` - Loading and saving image files
//!
//! Every transform borrows its input and returns a new `Grid`.

pub mod adjustments;
pub mod decode;
pub mod encode;
pub mod equalize;
pub mod grid;
pub mod histogram;
pub mod luminosity;
pub mod operation;
pub mod overlay;
pub mod pixel;
pub mod transform;

pub use adjustments::{chroma_key, grayscale};
pub use equalize::equalize;
pub use grid::{Grid, GridError};
pub use histogram::{compute_luminosity_histogram, LuminosityHistogram};
pub use luminosity::{compute_luminosity, pixel_luminosity};
pub use operation::{apply_operation, list_operations, Operation, OperationInfo};
pub use overlay::overlay;
pub use pixel::Pixel;
pub use transform::{flip_horizontal, flip_vertical, rotate_left, rotate_right};
