//! Quarter-turn rotations.
//!
//! Both functions map an H x W grid to a W x H grid. Rotating left then right
//! (in either order) restores the original exactly.

use crate::Grid;

/// Rotate a grid 90 degrees counter-clockwise.
///
/// `result[W - 1 - col][row] = input[row][col]`, so the original left column
/// becomes the new bottom row.
pub fn rotate_left(grid: &Grid) -> Grid {
    let (src_w, src_h) = (grid.width(), grid.height());
    // Output is src_h wide and src_w tall; invert the mapping per output cell.
    Grid::from_fn(src_h, src_w, |row, col| grid.at(col, src_w - 1 - row))
}

/// Rotate a grid 90 degrees clockwise.
///
/// `result[col][H - 1 - row] = input[row][col]`, so the original top row
/// becomes the new right column.
pub fn rotate_right(grid: &Grid) -> Grid {
    let (src_w, src_h) = (grid.width(), grid.height());
    Grid::from_fn(src_h, src_w, |row, col| grid.at(src_h - 1 - col, row))
}
