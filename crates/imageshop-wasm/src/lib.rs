//! ImageShop WASM - WebAssembly bindings for ImageShop
//!
//! This crate exposes the imageshop-core engine to a JavaScript/TypeScript
//! shell. The shell owns the "current image"; every binding takes a grid and
//! hands back a new one.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for grids
//! - `transform` - Named operations and overlay
//! - `decode` - Loading image files
//! - `encode` - Saving PNG files
//! - `histogram` - Luminosity histogram for display
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, apply_operation, encode_png } from '@imageshop/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! let grid = decode_image(bytes);
//! grid = apply_operation("rotate_left", grid);
//! const png = encode_png(grid);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod histogram;
mod transform;
mod types;

// Re-export public types
pub use decode::decode_image;
pub use encode::encode_png;
pub use histogram::{compute_luminosity_histogram, JsLuminosityHistogram};
pub use transform::{apply_operation, list_operations, overlay};
pub use types::JsGrid;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&JsValue::from_str(&format!(
        "ImageShop WASM {} ready",
        version()
    )));
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
