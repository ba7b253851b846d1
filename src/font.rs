//! Column font for digits and space, and the text-to-canvas encoder.
//!
//! Glyphs are stored column by column. Each column is one byte covering eight
//! lights, most significant bit at the top. Digits are four columns wide, the
//! space is one column wide.
//!
//! ```text
//! '2' = 9F 91 91 F1
//!
//!   1 1 1 1
//!   . . . 1
//!   . . . 1
//!   1 1 1 1
//!   1 . . .
//!   1 . . .
//!   1 . . .
//!   1 1 1 1
//! ```

use crate::frame::BitCanvas;

/// Lights per glyph column.
pub const GLYPH_HEIGHT: usize = 8;

/// Columns per digit glyph.
pub const DIGIT_WIDTH: usize = 4;

const SPACE: [u8; 1] = [0x00];

// Digits 0-9, column bytes left to right.
const DIGITS: [[u8; DIGIT_WIDTH]; 10] = [
    [0xFF, 0x81, 0x81, 0xFF], // 0
    [0x00, 0x00, 0xFF, 0x00], // 1
    [0x9F, 0x91, 0x91, 0xF1], // 2
    [0x81, 0x91, 0x91, 0xFF], // 3
    [0xF0, 0x10, 0x10, 0xFF], // 4
    [0xF1, 0x91, 0x91, 0x9F], // 5
    [0xFF, 0x91, 0x91, 0x9F], // 6
    [0x80, 0x80, 0x80, 0xFF], // 7
    [0xFF, 0x91, 0x91, 0xFF], // 8
    [0xF1, 0x91, 0x91, 0xFF], // 9
];

/// Bit pattern of one supported character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    columns: &'static [u8],
}

impl Glyph {
    /// Column bytes, left to right, most significant bit = top light.
    #[must_use]
    pub const fn columns(&self) -> &'static [u8] {
        self.columns
    }

    /// Width in columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.columns.len()
    }

    /// Number of bits this glyph contributes to a canvas.
    #[must_use]
    pub const fn bit_len(&self) -> usize {
        self.columns.len() * GLYPH_HEIGHT
    }

    /// Bits in canvas order: each column top to bottom, columns left to right.
    pub fn bits(self) -> impl Iterator<Item = bool> {
        self.columns.iter().flat_map(|&column| column_bits(column))
    }
}

fn column_bits(column: u8) -> impl Iterator<Item = bool> {
    (0..GLYPH_HEIGHT).rev().map(move |shift| (column >> shift) & 1 == 1)
}

/// Whether `ch` has a glyph. Only ASCII digits and the plain space do.
#[must_use]
pub const fn is_supported(ch: char) -> bool {
    ch == ' ' || ch.is_ascii_digit()
}

/// Look up the glyph for `ch`, or `None` if the font does not cover it.
#[must_use]
pub fn glyph(ch: char) -> Option<Glyph> {
    match ch {
        ' ' => Some(Glyph { columns: &SPACE }),
        '0'..='9' => {
            let index = ch.to_digit(10)? as usize;
            DIGITS.get(index).map(|columns| Glyph { columns })
        }
        _ => None,
    }
}

fn glyphs(text: &str) -> impl Iterator<Item = Glyph> + '_ {
    text.chars().filter_map(glyph)
}

/// Length in bits of `text` before it is fitted to a panel.
///
/// Compare against the panel length to tell whether [`encode`] will truncate.
#[must_use]
pub fn encoded_len(text: &str) -> usize {
    glyphs(text).map(|glyph| glyph.bit_len()).sum()
}

/// Encode `text` into exactly `N` bits.
///
/// Unsupported characters are dropped. The result is padded with off bits or
/// cut short on the right so that it always holds `N` bits.
#[must_use]
pub fn encode<const N: usize>(text: &str) -> BitCanvas<N> {
    let mut canvas = BitCanvas::<N>::new();
    for (slot, bit) in canvas.iter_mut().zip(glyphs(text).flat_map(Glyph::bits)) {
        *slot = bit;
    }
    #[cfg(feature = "defmt")]
    defmt::trace!(
        "font::encode: {} bits into {} lights",
        encoded_len(text),
        N
    );
    canvas
}
