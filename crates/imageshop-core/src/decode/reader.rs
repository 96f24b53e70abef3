//! Image decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::ImageReader;

use super::{DecodeError, Orientation, MAX_DECODE_DIMENSION};
use crate::transform::{flip_horizontal, flip_vertical, rotate_left, rotate_right};
use crate::Grid;

/// Decode PNG or JPEG bytes into a grid, applying EXIF orientation correction.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be detected.
/// Returns `DecodeError::TooLarge` if a side exceeds `MAX_DECODE_DIMENSION`.
/// Returns `DecodeError::CorruptedFile` if decoding fails.
pub fn decode_image(bytes: &[u8]) -> Result<Grid, DecodeError> {
    let grid = decode_image_no_orientation(bytes)?;
    let orientation = extract_orientation(bytes);
    Ok(apply_orientation(grid, orientation))
}

/// Decode PNG or JPEG bytes into a grid without applying EXIF orientation.
pub fn decode_image_no_orientation(bytes: &[u8]) -> Result<Grid, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;
    let format = reader.format().ok_or(DecodeError::InvalidFormat)?;

    // Check the header before allocating the full pixel buffer
    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;
    if width > MAX_DECODE_DIMENSION || height > MAX_DECODE_DIMENSION {
        return Err(DecodeError::TooLarge { width, height });
    }

    let img = ImageReader::with_format(Cursor::new(bytes), format)
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    log::debug!("decoded {:?} image {}x{}", format, width, height);
    Ok(Grid::from_rgba_image(&img.into_rgba8()))
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(exif::Error::NotFound(_)) => Orientation::Normal,
        Err(e) => {
            log::warn!("ignoring unreadable EXIF data: {}", e);
            Orientation::Normal
        }
    }
}

/// Rotate and flip a grid so an image stored with `orientation` displays upright.
pub fn apply_orientation(grid: Grid, orientation: Orientation) -> Grid {
    if orientation != Orientation::Normal {
        log::debug!("applying EXIF orientation {:?}", orientation);
    }
    match orientation {
        Orientation::Normal => grid,
        Orientation::FlipHorizontal => flip_horizontal(&grid),
        Orientation::Rotate180 => flip_horizontal(&flip_vertical(&grid)),
        Orientation::FlipVertical => flip_vertical(&grid),
        Orientation::Transpose => flip_horizontal(&rotate_right(&grid)),
        Orientation::Rotate90CW => rotate_right(&grid),
        Orientation::Transverse => flip_horizontal(&rotate_left(&grid)),
        Orientation::Rotate270CW => rotate_left(&grid),
    }
}
