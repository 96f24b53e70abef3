//! WASM bindings for the editing operations.
//!
//! The shell passes an operation name (as listed by [`list_operations`]) and
//! the current grid; the result replaces the shell's current image.

use crate::types::JsGrid;
use imageshop_core::operation;
use imageshop_core::overlay::overlay as core_overlay;
use wasm_bindgen::prelude::*;

/// Apply a named operation to a grid.
///
/// # Arguments
///
/// * `name` - Operation id (`"rotate_left"`) or label (`"Rotate Left"`)
/// * `grid` - The current image
///
/// # Errors
///
/// Returns an error if the name is unknown or the grid's pixel buffer does
/// not match its dimensions.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const flipped = apply_operation("flip_vertical", grid);
/// const keyed = apply_operation("Green Screen", grid);
/// ```
#[wasm_bindgen]
pub fn apply_operation(name: &str, grid: &JsGrid) -> Result<JsGrid, JsValue> {
    let src = grid.to_grid().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let result = operation::apply_operation(name, &src).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsGrid::from_grid(&result))
}

/// List every operation as `{ id, label }` objects, in display order.
///
/// # Example (TypeScript)
///
/// ```typescript
/// for (const { id, label } of list_operations()) {
///   addButton(label, () => apply_operation(id, current));
/// }
/// ```
#[wasm_bindgen]
pub fn list_operations() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&operation::list_operations())
        .map_err(|e| JsValue::from_str(&format!("Failed to list operations: {}", e)))
}

/// Draw `top` centered over `base`, blending by alpha.
///
/// The result has the base's dimensions. Pixels made transparent by the
/// green screen operation let the base show through.
#[wasm_bindgen]
pub fn overlay(base: &JsGrid, top: &JsGrid) -> Result<JsGrid, JsValue> {
    let base = base.to_grid().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let top = top.to_grid().map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsGrid::from_grid(&core_overlay(&base, &top)))
}

/// Tests for transform bindings.
///
/// Error paths build a `JsValue`, which only works on wasm32 targets; these
/// native tests stick to inputs that succeed.
#[cfg(test)]
mod tests {
    use super::*;

    /// Create a simple test grid.
    fn test_grid(width: u32, height: u32) -> JsGrid {
        let pixels: Vec<u8> = (0..(width * height * 4) as usize)
            .map(|i| (i % 256) as u8)
            .collect();
        JsGrid::new(width, height, pixels)
    }

    #[test]
    fn test_rotate_swaps_dimensions() {
        let grid = test_grid(10, 4);
        let result = apply_operation("rotate_left", &grid).unwrap();
        assert_eq!(result.width(), 4);
        assert_eq!(result.height(), 10);
    }

    #[test]
    fn test_flip_twice_restores() {
        let grid = test_grid(6, 3);
        let once = apply_operation("Flip Horizontal", &grid).unwrap();
        let twice = apply_operation("Flip Horizontal", &once).unwrap();
        assert_eq!(twice.pixels(), grid.pixels());
    }

    #[test]
    fn test_grayscale_bytes() {
        let grid = JsGrid::new(1, 1, vec![255, 255, 255, 10]);
        let result = apply_operation("grayscale", &grid).unwrap();
        assert_eq!(result.pixels(), vec![255, 255, 255, 255]);
    }

    #[test]
    fn test_green_screen_clears_alpha() {
        let grid = JsGrid::new(1, 1, vec![10, 50, 10, 255]);
        let result = apply_operation("green_screen", &grid).unwrap();
        assert_eq!(result.pixels(), vec![10, 50, 10, 0]);
    }

    #[test]
    fn test_every_operation_on_empty_grid() {
        let grid = JsGrid::new(0, 0, vec![]);
        for info in operation::list_operations() {
            let result = apply_operation(&info.id, &grid).unwrap();
            assert_eq!(result.width(), 0);
            assert_eq!(result.height(), 0);
        }
    }

    #[test]
    fn test_overlay_keeps_base_size() {
        let base = test_grid(8, 8);
        let top = JsGrid::new(2, 2, vec![0u8; 16]);
        let result = overlay(&base, &top).unwrap();
        assert_eq!(result.width(), 8);
        assert_eq!(result.height(), 8);
        // Fully transparent top leaves the base untouched
        assert_eq!(result.pixels(), base.pixels());
    }
}
