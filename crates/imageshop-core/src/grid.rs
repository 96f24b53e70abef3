//! The rectangular pixel container every transform works on.

use thiserror::Error;

use crate::Pixel;

/// Errors raised by grid construction, pixel access and operation lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A row's length differs from the first row's length.
    #[error("Jagged grid: row {row} has {actual} pixels, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A flat pixel buffer does not hold `width * height` pixels.
    #[error("Invalid pixel data: expected {expected} pixels (width * height), got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Direct pixel access outside the grid bounds.
    #[error("Pixel ({row}, {col}) is outside a {height}x{width} grid")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// No operation matches the requested name.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

/// A rectangular 2-D grid of pixels, row-major, row 0 at the top.
///
/// Every constructor validates the rectangular invariant, so transforms can
/// treat any `Grid` they receive as well-formed. A grid with no pixels is
/// always 0x0.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl Grid {
    /// Create a grid from a flat row-major pixel buffer.
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self, GridError> {
        let expected = checked_len(width, height, 1);
        if expected != Some(pixels.len()) {
            return Err(GridError::SizeMismatch {
                expected: expected.unwrap_or(usize::MAX),
                actual: pixels.len(),
            });
        }
        if pixels.is_empty() {
            return Ok(Self::empty());
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a grid from nested rows, rejecting jagged input.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut pixels = Vec::with_capacity(rows.iter().map(Vec::len).sum());
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::Jagged {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            pixels.extend(values);
        }

        Self::new(width, height, pixels)
    }

    /// A grid of the given size with every pixel set to `pixel`.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Self {
        if width == 0 || height == 0 {
            return Self::empty();
        }
        Self {
            width,
            height,
            pixels: vec![pixel; width * height],
        }
    }

    /// The 0x0 grid.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a grid of the given size by evaluating `f(row, col)` for every cell.
    pub(crate) fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Pixel) -> Self {
        if width == 0 || height == 0 {
            return Self::empty();
        }
        let mut pixels = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A grid of the same size with `f` applied to every pixel.
    pub(crate) fn map_pixels(&self, f: impl FnMut(Pixel) -> Pixel) -> Self {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().copied().map(f).collect(),
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Check if the grid holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The pixel at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Pixel, GridError> {
        if row >= self.height || col >= self.width {
            return Err(GridError::IndexOutOfRange {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(self.pixels[row * self.width + col])
    }

    /// Unchecked-by-`Result` access for in-bounds indices computed by transforms.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> Pixel {
        self.pixels[row * self.width + col]
    }

    /// The pixels of row `row`, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[Pixel]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.pixels[start..start + self.width])
    }

    /// Iterate over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        // chunks_exact panics on a zero chunk size
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Consume the grid into nested rows.
    pub fn into_rows(self) -> Vec<Vec<Pixel>> {
        self.rows().map(<[Pixel]>::to_vec).collect()
    }

    /// Create a grid from RGBA bytes (4 bytes per pixel, row-major order).
    pub fn from_rgba_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, GridError> {
        let expected = checked_len(width, height, 4);
        if expected != Some(bytes.len()) {
            return Err(GridError::SizeMismatch {
                expected: expected.unwrap_or(usize::MAX),
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| Pixel::from_rgba([c[0], c[1], c[2], c[3]]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// RGBA bytes (4 bytes per pixel, row-major order).
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_rgba()).collect()
    }

    /// Create a grid from an `image::RgbaImage`.
    pub fn from_rgba_image(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self::from_fn(width as usize, height as usize, |row, col| {
            Pixel::from_rgba(img.get_pixel(col as u32, row as u32).0)
        })
    }

    /// Convert to an `image::RgbaImage` for encoding.
    ///
    /// Returns `None` if a dimension does not fit in `u32`.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        let width = u32::try_from(self.width).ok()?;
        let height = u32::try_from(self.height).ok()?;
        image::RgbaImage::from_raw(width, height, self.to_rgba_bytes())
    }
}

/// `width * height * per_pixel`, or `None` if it overflows `usize`.
fn checked_len(width: usize, height: usize, per_pixel: usize) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(per_pixel)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test grid where each pixel encodes its position.
    fn test_grid(width: usize, height: usize) -> Grid {
        Grid::from_fn(width, height, |row, col| {
            Pixel::pack(255, row as u8, col as u8, 0)
        })
    }

    #[test]
    fn test_dimensions() {
        let grid = test_grid(3, 2);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.pixel_count(), 6);
        assert!(!grid.is_empty());
    }

    #[test]
    fn test_get_in_bounds() {
        let grid = test_grid(3, 2);
        assert_eq!(grid.get(1, 2).unwrap(), Pixel::pack(255, 1, 2, 0));
        assert_eq!(grid.get(0, 0).unwrap(), Pixel::pack(255, 0, 0, 0));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = test_grid(3, 2);
        assert_eq!(
            grid.get(2, 0),
            Err(GridError::IndexOutOfRange {
                row: 2,
                col: 0,
                height: 2,
                width: 3
            })
        );
        assert!(grid.get(0, 3).is_err());
        assert!(Grid::empty().get(0, 0).is_err());
    }

    #[test]
    fn test_from_rows() {
        let a = Pixel::rgb(1, 2, 3);
        let b = Pixel::rgb(4, 5, 6);
        let grid = Grid::from_rows(vec![vec![a, b], vec![b, a]]).unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(1, 0).unwrap(), b);
        assert_eq!(grid.into_rows(), vec![vec![a, b], vec![b, a]]);
    }

    #[test]
    fn test_from_rows_rejects_jagged() {
        let p = Pixel::rgb(0, 0, 0);
        let err = Grid::from_rows(vec![vec![p, p], vec![p]]).unwrap_err();
        assert_eq!(
            err,
            GridError::Jagged {
                row: 1,
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_empty_rows_normalize_to_empty() {
        let grid = Grid::from_rows(vec![vec![], vec![], vec![]]).unwrap();
        assert_eq!(grid, Grid::empty());
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.height(), 0);
    }

    #[test]
    fn test_new_size_mismatch() {
        let err = Grid::new(2, 2, vec![Pixel::default(); 3]).unwrap_err();
        assert_eq!(
            err,
            GridError::SizeMismatch {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_new_overflowing_dimensions() {
        let err = Grid::new(usize::MAX / 2 + 1, 2, vec![]).unwrap_err();
        assert_eq!(
            err,
            GridError::SizeMismatch {
                expected: usize::MAX,
                actual: 0
            }
        );
    }

    #[test]
    fn test_rgba_bytes_overflowing_dimensions() {
        let err = Grid::from_rgba_bytes(usize::MAX / 4 + 1, 1, &[]).unwrap_err();
        assert!(matches!(err, GridError::SizeMismatch { actual: 0, .. }));

        // Wraps to zero without the check
        let err = Grid::from_rgba_bytes(usize::MAX / 2 + 1, 2, &[]).unwrap_err();
        assert!(matches!(err, GridError::SizeMismatch { actual: 0, .. }));
    }

    #[test]
    fn test_rows_iterator() {
        let grid = test_grid(2, 3);
        let rows: Vec<&[Pixel]> = grid.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2][1], Pixel::pack(255, 2, 1, 0));
        assert_eq!(grid.row(2), Some(rows[2]));
        assert_eq!(grid.row(3), None);
        assert_eq!(Grid::empty().rows().count(), 0);
    }

    #[test]
    fn test_rgba_bytes() {
        let bytes = vec![10, 20, 30, 40, 50, 60, 70, 80];
        let grid = Grid::from_rgba_bytes(2, 1, &bytes).unwrap();
        assert_eq!(grid.get(0, 1).unwrap().unpack(), (80, 50, 60, 70));
        assert_eq!(grid.to_rgba_bytes(), bytes);
        assert!(Grid::from_rgba_bytes(2, 2, &bytes).is_err());
    }

    #[test]
    fn test_rgba_image_conversion() {
        let grid = test_grid(4, 3);
        let img = grid.to_rgba_image().unwrap();
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(img.get_pixel(2, 1).0, [1, 2, 0, 255]);
        assert_eq!(Grid::from_rgba_image(&img), grid);
    }

    #[test]
    fn test_error_display() {
        let err = GridError::UnknownOperation("sharpen".to_string());
        assert_eq!(err.to_string(), "Unknown operation: sharpen");
    }
}
