//! Luminosity calculation using ITU-R BT.601 weights.
//!
//! Grayscale conversion and histogram equalization both rank pixels by this
//! single perceptual brightness value.

use crate::Pixel;

/// BT.601 coefficient for the red channel.
pub const LUMINOSITY_R: f64 = 0.299;

/// BT.601 coefficient for the green channel.
pub const LUMINOSITY_G: f64 = 0.587;

/// BT.601 coefficient for the blue channel.
pub const LUMINOSITY_B: f64 = 0.114;

/// Compute luminosity from u8 RGB values.
///
/// The weighted sum is rounded to the nearest integer, halves rounding up.
///
/// # Arguments
/// * `r` - Red channel value (0-255)
/// * `g` - Green channel value (0-255)
/// * `b` - Blue channel value (0-255)
///
/// # Returns
/// Luminosity value (0-255)
#[inline]
pub fn compute_luminosity(r: u8, g: u8, b: u8) -> u8 {
    let lum = LUMINOSITY_R * r as f64 + LUMINOSITY_G * g as f64 + LUMINOSITY_B * b as f64;
    lum.round().clamp(0.0, 255.0) as u8
}

/// Luminosity of a pixel. Alpha is ignored.
#[inline]
pub fn pixel_luminosity(pixel: Pixel) -> u8 {
    compute_luminosity(pixel.red(), pixel.green(), pixel.blue())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        let sum = LUMINOSITY_R + LUMINOSITY_G + LUMINOSITY_B;
        assert!((sum - 1.0).abs() < 1e-9, "Coefficients should sum to 1.0");
    }

    #[test]
    fn test_luminosity_pure_white() {
        assert_eq!(compute_luminosity(255, 255, 255), 255);
    }

    #[test]
    fn test_luminosity_pure_black() {
        assert_eq!(compute_luminosity(0, 0, 0), 0);
    }

    #[test]
    fn test_luminosity_gray_preserves_value() {
        for v in 0..=255u8 {
            assert_eq!(compute_luminosity(v, v, v), v, "Gray {} should keep its value", v);
        }
    }

    #[test]
    fn test_luminosity_primaries() {
        // 0.299 * 255 = 76.245
        assert_eq!(compute_luminosity(255, 0, 0), 76);
        // 0.587 * 255 = 149.685
        assert_eq!(compute_luminosity(0, 255, 0), 150);
        // 0.114 * 255 = 29.07
        assert_eq!(compute_luminosity(0, 0, 255), 29);
    }

    #[test]
    fn test_pixel_luminosity_ignores_alpha() {
        let opaque = Pixel::pack(255, 10, 50, 10);
        let clear = Pixel::pack(0, 10, 50, 10);
        assert_eq!(pixel_luminosity(opaque), pixel_luminosity(clear));
        // 2.99 + 29.35 + 1.14 = 33.48
        assert_eq!(pixel_luminosity(opaque), 33);
    }
}
