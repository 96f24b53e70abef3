//! Luminosity histogram WASM bindings.

use crate::types::JsGrid;
use imageshop_core::histogram::compute_luminosity_histogram as compute_core;
use wasm_bindgen::prelude::*;

/// Luminosity histogram accessible from JavaScript.
#[wasm_bindgen]
pub struct JsLuminosityHistogram {
    counts: Vec<u32>,
    cumulative: Vec<f64>,
    total: f64,
    max_count: u32,
}

#[wasm_bindgen]
impl JsLuminosityHistogram {
    /// Get luminosity counts (256 bins).
    pub fn counts(&self) -> Vec<u32> {
        self.counts.clone()
    }

    /// Get the running sum of the counts (256 bins).
    pub fn cumulative(&self) -> Vec<f64> {
        self.cumulative.clone()
    }

    /// Total number of pixels counted.
    #[wasm_bindgen(getter)]
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Largest bin, for normalizing the display.
    #[wasm_bindgen(getter)]
    pub fn max_count(&self) -> u32 {
        self.max_count
    }
}

/// Compute the luminosity histogram of a grid.
///
/// # Example (TypeScript)
/// ```typescript
/// const hist = compute_luminosity_histogram(grid);
/// const bins = hist.counts();   // Uint32Array[256]
/// const max = hist.max_count;
/// hist.free();
/// ```
#[wasm_bindgen]
pub fn compute_luminosity_histogram(grid: &JsGrid) -> Result<JsLuminosityHistogram, JsValue> {
    let grid = grid.to_grid().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let hist = compute_core(&grid);

    Ok(JsLuminosityHistogram {
        counts: hist.counts.to_vec(),
        // u64 has no lossless JS mapping; f64 is exact up to 2^53 pixels
        cumulative: hist.cumulative().iter().map(|&c| c as f64).collect(),
        total: hist.total() as f64,
        max_count: hist.max_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_bins() {
        // black, white, white
        let grid = JsGrid::new(3, 1, vec![0, 0, 0, 255, 255, 255, 255, 255, 255, 255, 255, 255]);
        let hist = compute_luminosity_histogram(&grid).unwrap();

        assert_eq!(hist.counts().len(), 256);
        assert_eq!(hist.counts()[0], 1);
        assert_eq!(hist.counts()[255], 2);
        assert_eq!(hist.max_count(), 2);
        assert_eq!(hist.total(), 3.0);
        assert_eq!(hist.cumulative()[254], 1.0);
        assert_eq!(hist.cumulative()[255], 3.0);
    }

    #[test]
    fn test_histogram_empty_grid() {
        let hist = compute_luminosity_histogram(&JsGrid::new(0, 0, vec![])).unwrap();
        assert_eq!(hist.total(), 0.0);
        assert_eq!(hist.max_count(), 0);
    }
}
