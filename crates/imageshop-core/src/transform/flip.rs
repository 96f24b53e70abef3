//! Mirror operations around the horizontal and vertical center lines.

use crate::Grid;

/// Flip a grid upside down.
///
/// `result[row][col] = input[height - 1 - row][col]`
pub fn flip_vertical(grid: &Grid) -> Grid {
    let height = grid.height();
    Grid::from_fn(grid.width(), height, |row, col| grid.at(height - 1 - row, col))
}

/// Mirror a grid left to right.
///
/// `result[row][col] = input[row][width - 1 - col]`
pub fn flip_horizontal(grid: &Grid) -> Grid {
    let width = grid.width();
    Grid::from_fn(width, grid.height(), |row, col| grid.at(row, width - 1 - col))
}
