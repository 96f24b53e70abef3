//! Per-pixel color adjustments.
//!
//! Each output pixel depends only on the input pixel at the same position,
//! so pixels can be processed in any order.

use crate::luminosity::pixel_luminosity;
use crate::pixel::TRANSPARENT;
use crate::{Grid, Pixel};

/// A pixel is keyed out when its green channel is at least this many times
/// the larger of its red and blue channels.
pub const CHROMA_KEY_RATIO: u16 = 2;

/// Convert a grid to opaque grayscale.
///
/// Red, green and blue are all replaced by the pixel's luminosity and alpha
/// is forced to 255.
pub fn grayscale(grid: &Grid) -> Grid {
    grid.map_pixels(|pixel| Pixel::opaque_gray(pixel_luminosity(pixel)))
}

/// Make "green screen" pixels fully transparent.
///
/// A pixel matches when `green >= 2 * max(red, blue)`; matching pixels get
/// alpha 0 with their color channels preserved. Everything else is left
/// untouched, including its alpha. Applying this twice is the same as once.
pub fn chroma_key(grid: &Grid) -> Grid {
    grid.map_pixels(|pixel| {
        if is_green_screen(pixel) {
            pixel.with_alpha(TRANSPARENT)
        } else {
            pixel
        }
    })
}

/// Check whether a pixel is dominated by green.
#[inline]
pub fn is_green_screen(pixel: Pixel) -> bool {
    let max = pixel.red().max(pixel.blue()) as u16;
    pixel.green() as u16 >= CHROMA_KEY_RATIO * max
}
