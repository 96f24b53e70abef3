//! Packed ARGB pixel values.
//!
//! A [`Pixel`] stores four 8-bit channels in a single `u32` laid out as
//! `0xAARRGGBB`, the same layout used by most desktop imaging toolkits for
//! their integer pixel arrays.
//!
//! # Channel Policy
//!
//! Channels outside `[0, 255]` are clamped, never rejected. The `u8` based
//! constructors cannot receive out-of-range values at all; [`Pixel::pack_clamped`]
//! accepts wide integers and clamps each channel.

use serde::{Deserialize, Serialize};

/// Fully opaque alpha value.
pub const OPAQUE: u8 = 255;

/// Fully transparent alpha value.
pub const TRANSPARENT: u8 = 0;

/// A single ARGB color sample packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Pixel(u32);

impl Pixel {
    /// Pack alpha, red, green and blue channels into a pixel.
    #[inline]
    pub const fn pack(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self(((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Pack channels given as wide integers, clamping each into `[0, 255]`.
    pub fn pack_clamped(alpha: i32, red: i32, green: i32, blue: i32) -> Self {
        let clamp = |v: i32| v.clamp(0, 255) as u8;
        Self::pack(clamp(alpha), clamp(red), clamp(green), clamp(blue))
    }

    /// Pack a fully opaque RGB color.
    #[inline]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::pack(OPAQUE, red, green, blue)
    }

    /// An opaque gray pixel with `value` in all three color channels.
    #[inline]
    pub const fn opaque_gray(value: u8) -> Self {
        Self::pack(OPAQUE, value, value, value)
    }

    /// Wrap a raw `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// The raw `0xAARRGGBB` value.
    #[inline]
    pub const fn argb(self) -> u32 {
        self.0
    }

    /// Split the pixel into `(alpha, red, green, blue)`.
    #[inline]
    pub const fn unpack(self) -> (u8, u8, u8, u8) {
        (self.alpha(), self.red(), self.green(), self.blue())
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// The same color with a different alpha channel.
    #[inline]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    /// Build a pixel from `[r, g, b, a]` bytes, the order used by RGBA buffers.
    #[inline]
    pub const fn from_rgba(rgba: [u8; 4]) -> Self {
        Self::pack(rgba[3], rgba[0], rgba[1], rgba[2])
    }

    /// Convert to `[r, g, b, a]` bytes.
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }
}

impl From<u32> for Pixel {
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}

impl From<Pixel> for u32 {
    fn from(pixel: Pixel) -> Self {
        pixel.argb()
    }
}
