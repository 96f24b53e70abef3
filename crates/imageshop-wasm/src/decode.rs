//! Image decoding WASM bindings.
//!
//! Loads PNG or JPEG file bytes into an upright grid (EXIF orientation is
//! applied).

use crate::types::JsGrid;
use imageshop_core::decode;
use wasm_bindgen::prelude::*;

/// Decode PNG or JPEG bytes into a grid.
///
/// # Errors
///
/// Returns an error if the format is unrecognized, the file is corrupted, or
/// the image is too large.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const bytes = new Uint8Array(await file.arrayBuffer());
/// const grid = decode_image(bytes);
/// console.log(`Loaded ${grid.width}x${grid.height}`);
/// ```
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsGrid, JsValue> {
    let grid = decode::decode_image(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsGrid::from_grid(&grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use imageshop_core::encode::encode_png;
    use imageshop_core::{Grid, Pixel};

    #[test]
    fn test_decode_png() {
        let core = Grid::filled(3, 2, Pixel::pack(128, 10, 20, 30));
        let png = encode_png(&core).unwrap();

        let grid = decode_image(&png).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(&grid.pixels()[0..4], &[10, 20, 30, 128]);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_invalid_bytes() {
        assert!(decode_image(&[1, 2, 3, 4]).is_err());
    }
}
