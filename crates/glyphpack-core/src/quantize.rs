//! Intensity quantization.
//!
//! The two output encodings read the same 8-bit sample but interpret it
//! differently: the packed-row encoding stores the brightness level as-is,
//! the bit-plane encoding stores inverted ink density. Keep [`quantize`] and
//! [`ink_level`] separate; downstream ROM formats depend on both.

use image::{GenericImageView, Pixel};

use crate::error::{PackError, PackResult};

/// Number of brightness levels produced by [`quantize`].
pub const LEVELS: u8 = 4;

/// Width of one quantization bucket.
const BUCKET: u8 = 64;

/// Map an 8-bit intensity onto a brightness level in `0..=3`.
pub fn quantize(intensity: u8) -> u8 {
    intensity / BUCKET
}

/// Remap a brightness level to ink density for the bit-plane encoding.
///
/// Level 0 is background and stays 0; levels 1..=3 become 3..=1.
pub fn ink_level(level: u8) -> u8 {
    if level == 0 {
        0
    } else {
        LEVELS - level
    }
}

/// Read the first channel of the pixel at `(x, y)`.
///
/// Out-of-range coordinates are an error, never wrapped or clamped.
pub fn sample<I>(image: &I, x: u32, y: u32) -> PackResult<u8>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    if !image.in_bounds(x, y) {
        let (width, height) = image.dimensions();
        return Err(PackError::PixelOutOfBounds {
            x,
            y,
            width,
            height,
        });
    }
    Ok(image.get_pixel(x, y).channels()[0])
}
