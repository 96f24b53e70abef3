//! Histogram equalization on luminosity.
//!
//! # Algorithm
//!
//! 1. Count how often each luminosity value occurs.
//! 2. Turn the counts into a cumulative distribution `cum`.
//! 3. Replace every pixel with an opaque gray of `255 * cum[L] / N`, where `L`
//!    is the pixel's luminosity and `N` the pixel count.
//!
//! The output is always grayscale: color is discarded along the way.

use crate::histogram::compute_luminosity_histogram;
use crate::luminosity::pixel_luminosity;
use crate::{Grid, Pixel};

/// Spread a grid's luminosity values across the full 0-255 range.
///
/// An empty grid is returned unchanged.
pub fn equalize(grid: &Grid) -> Grid {
    let total = grid.pixel_count() as u64;
    if total == 0 {
        return grid.clone();
    }

    let cum = compute_luminosity_histogram(grid).cumulative();
    debug_assert_eq!(cum[255], total);

    // Precompute the output for each luminosity value
    let mut lut = [0u8; 256];
    for (out, &c) in lut.iter_mut().zip(cum.iter()) {
        *out = (255 * c / total) as u8;
    }

    grid.map_pixels(|pixel| Pixel::opaque_gray(lut[pixel_luminosity(pixel) as usize]))
}
