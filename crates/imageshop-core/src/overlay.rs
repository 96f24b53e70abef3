//! Drawing one grid centered on top of another.
//!
//! This is how a keyed-out foreground (see [`crate::adjustments::chroma_key`])
//! is placed over a new background: transparent foreground pixels let the
//! base show through.
//!
//! # Placement
//!
//! The top grid's origin lands at `((Wb - Wt) / 2, (Hb - Ht) / 2)` with the
//! division truncating toward zero. A top grid larger than the base gets a
//! negative offset and is clipped to the base's bounds.

use crate::pixel::{OPAQUE, TRANSPARENT};
use crate::{Grid, Pixel};

/// Composite `top` centered over `base` using source-over alpha blending.
///
/// The result always has the base's dimensions. When the base is empty there
/// is nothing to draw onto, so the top grid itself is returned.
pub fn overlay(base: &Grid, top: &Grid) -> Grid {
    if base.is_empty() {
        return top.clone();
    }

    let x0 = center_offset(base.width(), top.width());
    let y0 = center_offset(base.height(), top.height());

    Grid::from_fn(base.width(), base.height(), |row, col| {
        let dst = base.at(row, col);
        let src_row = row as i64 - y0;
        let src_col = col as i64 - x0;
        if src_row < 0 || src_col < 0 {
            return dst;
        }
        let (src_row, src_col) = (src_row as usize, src_col as usize);
        if src_row >= top.height() || src_col >= top.width() {
            return dst;
        }
        blend_over(top.at(src_row, src_col), dst)
    })
}

/// `(outer - inner) / 2`, truncating toward zero.
#[inline]
fn center_offset(outer: usize, inner: usize) -> i64 {
    (outer as i64 - inner as i64) / 2
}

/// Source-over compositing of two non-premultiplied pixels.
pub fn blend_over(src: Pixel, dst: Pixel) -> Pixel {
    match src.alpha() {
        OPAQUE => return src,
        TRANSPARENT => return dst,
        _ => {}
    }

    let sa = src.alpha() as f32 / 255.0;
    let da = dst.alpha() as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    let channel = |s: u8, d: u8| -> u8 {
        let c = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
        c.round().clamp(0.0, 255.0) as u8
    };

    Pixel::pack(
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
        channel(src.red(), dst.red()),
        channel(src.green(), dst.green()),
        channel(src.blue(), dst.blue()),
    )
}
