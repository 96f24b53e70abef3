//! WASM-compatible wrapper type for pixel grids.
//!
//! JavaScript sees a grid as its dimensions plus a flat RGBA byte buffer, the
//! same layout as `ImageData.data`, so results can be drawn to a canvas
//! without conversion.

use imageshop_core::Grid;
use wasm_bindgen::prelude::*;

/// A pixel grid wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`.
///
/// The `free()` method can be called to explicitly release WASM memory, but this is
/// optional as wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsGrid {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsGrid {
    /// Create a new JsGrid from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Grid width in pixels
    /// * `height` - Grid height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsGrid {
        JsGrid {
            width,
            height,
            pixels,
        }
    }

    /// Get the grid width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsGrid {
    /// Create a JsGrid from a core Grid.
    pub(crate) fn from_grid(grid: &Grid) -> Self {
        Self {
            width: grid.width() as u32,
            height: grid.height() as u32,
            pixels: grid.to_rgba_bytes(),
        }
    }

    /// Convert back to a core Grid, validating the buffer length.
    pub(crate) fn to_grid(&self) -> Result<Grid, imageshop_core::GridError> {
        Grid::from_rgba_bytes(self.width as usize, self.height as usize, &self.pixels)
    }
}
