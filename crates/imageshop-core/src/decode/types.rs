//! Core types for image decoding.

use thiserror::Error;

/// Largest accepted width or height, in pixels.
pub const MAX_DECODE_DIMENSION: u32 = 16_384;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The image exceeds `MAX_DECODE_DIMENSION` on some side.
    #[error("Image too large: {width}x{height} exceeds {MAX_DECODE_DIMENSION} pixels per side")]
    TooLarge { width: u32, height: u32 },
}

/// How the stored pixels of a photo relate to its upright view.
///
/// Discriminants are the EXIF `Orientation` tag values. Each variant names the
/// correction `apply_orientation` performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    /// Mirrored across the main diagonal.
    Transpose = 5,
    Rotate90CW = 6,
    /// Mirrored across the anti-diagonal.
    Transverse = 7,
    Rotate270CW = 8,
}

impl Orientation {
    /// Returns true if correcting this orientation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose
                | Orientation::Rotate90CW
                | Orientation::Transverse
                | Orientation::Rotate270CW
        )
    }
}

/// Tag values outside 1..=8 are treated as upright.
impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        use Orientation::*;
        const TABLE: [Orientation; 8] = [
            Normal,
            FlipHorizontal,
            Rotate180,
            FlipVertical,
            Transpose,
            Rotate90CW,
            Transverse,
            Rotate270CW,
        ];
        value
            .checked_sub(1)
            .and_then(|i| TABLE.get(i as usize))
            .copied()
            .unwrap_or(Normal)
    }
}
