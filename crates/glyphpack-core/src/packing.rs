//! Glyph packers.
//!
//! Both packers walk an 8x8 cell top to bottom, left to right, and place the
//! leftmost pixel in the highest bits of each row value.

use image::{GenericImageView, Pixel};

use crate::error::PackResult;
use crate::grid::{GlyphCell, CELL_SIZE};
use crate::quantize::{ink_level, quantize, sample};

/// Rows per glyph.
pub const ROWS_PER_GLYPH: usize = CELL_SIZE as usize;

/// Number of bit planes in the bit-plane encoding.
pub const PLANES: usize = 2;

/// Row values of one glyph at 2 bits per pixel.
pub type PackedGlyph = [u16; ROWS_PER_GLYPH];

/// Plane 0 rows followed by plane 1 rows, 1 bit per pixel each.
pub type PlanarGlyph = [u8; ROWS_PER_GLYPH * PLANES];

/// Pack one glyph at 2 bits per pixel, one `u16` per row.
///
/// Pixel `x` of a row lands in bits `(7 - x) * 2 ..= (7 - x) * 2 + 1`. The
/// value is not masked: a row of level-3 pixels packs to `0xFFFF`.
pub fn pack_glyph_2bit<I>(image: &I, cell: GlyphCell) -> PackResult<PackedGlyph>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    cell.check_fits(width, height)?;
    let (x0, y0) = cell.origin();

    let mut rows = [0u16; ROWS_PER_GLYPH];
    for (char_y, row) in rows.iter_mut().enumerate() {
        let y = y0 + char_y as u32;
        let mut value = 0u16;
        for char_x in 0..CELL_SIZE {
            let level = quantize(sample(image, x0 + char_x, y)?) as u16;
            value |= level << ((7 - char_x) * 2);
        }
        *row = value;
    }
    Ok(rows)
}

/// Pack one glyph as two 1-bit planes of ink density.
///
/// Plane `bit` holds bit `bit` of [`ink_level`] for every pixel, leftmost
/// pixel in bit 7. Plane 0's eight rows come first.
pub fn pack_glyph_bitplanes<I>(image: &I, cell: GlyphCell) -> PackResult<PlanarGlyph>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    let (width, height) = image.dimensions();
    cell.check_fits(width, height)?;
    let (x0, y0) = cell.origin();

    let mut out = [0u8; ROWS_PER_GLYPH * PLANES];
    for bit in 0..PLANES {
        for char_y in 0..ROWS_PER_GLYPH {
            let y = y0 + char_y as u32;
            let mut value = 0u8;
            for char_x in 0..CELL_SIZE {
                let ink = ink_level(quantize(sample(image, x0 + char_x, y)?));
                let pbit = (ink >> bit) & 1;
                value |= pbit << (7 - char_x);
            }
            out[bit * ROWS_PER_GLYPH + char_y] = value;
        }
    }
    Ok(out)
}

/// Split a packed 2-bit row back into its eight levels, leftmost first.
pub fn unpack_row_2bit(value: u16) -> [u8; 8] {
    let mut levels = [0u8; 8];
    for (char_x, level) in levels.iter_mut().enumerate() {
        *level = ((value >> ((7 - char_x) * 2)) & 0b11) as u8;
    }
    levels
}

/// Recombine the two plane bytes of one row into per-pixel ink levels.
pub fn merge_planes(plane0: u8, plane1: u8) -> [u8; 8] {
    let mut inks = [0u8; 8];
    for (char_x, ink) in inks.iter_mut().enumerate() {
        let shift = 7 - char_x;
        *ink = ((plane0 >> shift) & 1) | (((plane1 >> shift) & 1) << 1);
    }
    inks
}
