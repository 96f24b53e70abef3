//! Luminosity histogram computation.
//!
//! Equalization needs the per-value counts and their running sum; the shell
//! can also display the counts directly.

use crate::luminosity::pixel_luminosity;
use crate::Grid;

/// Number of luminosity buckets.
pub const BUCKETS: usize = 256;

/// Counts of each luminosity value in a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuminosityHistogram {
    /// Occurrences of each luminosity value (256 bins)
    pub counts: [u32; BUCKETS],
}

impl Default for LuminosityHistogram {
    fn default() -> Self {
        Self {
            counts: [0; BUCKETS],
        }
    }
}

impl LuminosityHistogram {
    /// Create a new empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of counted pixels.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Largest single bucket, for normalizing a histogram display.
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Running sum of the counts: `cumulative[k] = counts[0] + ... + counts[k]`.
    pub fn cumulative(&self) -> [u64; BUCKETS] {
        let mut cum = [0u64; BUCKETS];
        let mut running = 0u64;
        for (slot, &count) in cum.iter_mut().zip(self.counts.iter()) {
            running += count as u64;
            *slot = running;
        }
        cum
    }
}

/// Compute the luminosity histogram of a grid.
///
/// Single pass, O(n) in the number of pixels. Alpha is ignored.
pub fn compute_luminosity_histogram(grid: &Grid) -> LuminosityHistogram {
    let mut hist = LuminosityHistogram::new();
    for &pixel in grid.pixels() {
        hist.counts[pixel_luminosity(pixel) as usize] += 1;
    }
    hist
}
