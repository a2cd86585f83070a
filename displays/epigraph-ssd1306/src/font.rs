//! 5x7 glyph table
//!
//! Column-major bitmaps for the supported ASCII subset: space, `!`, and
//! the digits `0`-`9`. Each glyph is five bytes, one per column, least
//! significant bit at the top pixel row of the page.

use crate::error::DriverError;

/// Columns per glyph bitmap
pub const GLYPH_COLUMNS: usize = 5;

/// Glyph bitmaps: space and `!`, then the digit run
static FONT_5X7: [[u8; GLYPH_COLUMNS]; 12] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // 32 (space)
    [0x00, 0x00, 0x5F, 0x00, 0x00], // 33 !
    [0x7C, 0x12, 0x11, 0x12, 0x7C], // 48 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 49 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 50 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 51 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 52 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 53 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 54 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 55 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 56 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 57 9
];

/// Look up the bitmap for one character code.
///
/// Codes outside the supported set fail with
/// [`DriverError::UnsupportedGlyph`]; the table is never indexed out of
/// its bounds.
pub fn glyph(code: u8) -> Result<&'static [u8; GLYPH_COLUMNS], DriverError> {
    let index = match code {
        b' ' => 0,
        b'!' => 1,
        b'0'..=b'9' => 2 + (code - b'0') as usize,
        _ => return Err(DriverError::UnsupportedGlyph(code)),
    };
    Ok(&FONT_5X7[index])
}
