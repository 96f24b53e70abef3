//! Image encoding WASM bindings.
//!
//! Saves a grid as PNG bytes the shell can offer as a download.

use crate::types::JsGrid;
use imageshop_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a grid as RGBA PNG bytes.
///
/// # Errors
///
/// Returns an error if the grid is empty or its pixel buffer does not match
/// its dimensions.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const png = encode_png(grid);
/// const blob = new Blob([png], { type: 'image/png' });
/// ```
#[wasm_bindgen]
pub fn encode_png(grid: &JsGrid) -> Result<Vec<u8>, JsValue> {
    let grid = grid.to_grid().map_err(|e| JsValue::from_str(&e.to_string()))?;
    encode::encode_png(&grid).map_err(|e| JsValue::from_str(&e.to_string()))
}
