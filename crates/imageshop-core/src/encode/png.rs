//! PNG encoding for saving edited grids.
//!
//! This module uses the `image` crate's PNG encoder. PNG is lossless and keeps
//! the alpha channel, so a grid decodes back to exactly the pixels it was
//! saved with.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::Grid;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero, or too large for the encoder
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero and fit in u32")]
    InvalidDimensions { width: usize, height: usize },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a grid to RGBA PNG bytes.
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for an empty grid, since PNG
/// cannot represent a 0x0 image.
pub fn encode_png(grid: &Grid) -> Result<Vec<u8>, EncodeError> {
    let invalid = || EncodeError::InvalidDimensions {
        width: grid.width(),
        height: grid.height(),
    };

    if grid.is_empty() {
        return Err(invalid());
    }
    let width = u32::try_from(grid.width()).map_err(|_| invalid())?;
    let height = u32::try_from(grid.height()).map_err(|_| invalid())?;

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(&grid.to_rgba_bytes(), width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    let bytes = buffer.into_inner();
    log::debug!("encoded {}x{} grid as {} PNG bytes", width, height, bytes.len());
    Ok(bytes)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::decode::decode_image;
    use crate::Pixel;
    use proptest::prelude::*;

    /// Strategy for generating a small grid of random ARGB pixels.
    fn grid_strategy() -> impl Strategy<Value = Grid> {
        (1usize..=12, 1usize..=12).prop_flat_map(|(width, height)| {
            prop::collection::vec(any::<u32>(), width * height).prop_map(move |values| {
                let pixels = values.into_iter().map(Pixel::from_argb).collect();
                Grid::new(width, height, pixels).unwrap()
            })
        })
    }

    proptest! {
        /// Property: Saving and reloading is lossless.
        #[test]
        fn prop_png_is_lossless(grid in grid_strategy()) {
            let png = encode_png(&grid).unwrap();
            let decoded = decode_image(&png).unwrap();
            prop_assert_eq!(decoded, grid);
        }
    }
}
