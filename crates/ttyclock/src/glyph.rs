//! Block digit font.
//!
//! Every digit is a 5-row by 6-column block. A glyph stores one entry per
//! pair of horizontally adjacent cells, so a row is three entries wide and
//! the whole glyph is fifteen entries in row-major order.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rows in a digit block.
pub const GLYPH_ROWS: u16 = 5;
/// Terminal columns in a digit block.
pub const GLYPH_COLS: u16 = 6;
/// Terminal columns covered by a single pattern entry.
pub const CELL_SPAN: u16 = 2;
/// Pattern entries per glyph.
pub const GLYPH_ENTRIES: usize = (GLYPH_ROWS * GLYPH_COLS / CELL_SPAN) as usize;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellClass {
    /// Background.
    #[default]
    Off,
    /// Alternate tone: separator dots on odd seconds, finished-timer blink.
    Dim,
    /// Foreground stroke.
    Lit,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    entries: [CellClass; GLYPH_ENTRIES],
}

impl Glyph {
    const fn from_bits(bits: [u8; GLYPH_ENTRIES]) -> Self {
        let mut entries = [CellClass::Off; GLYPH_ENTRIES];
        let mut i = 0;
        while i < GLYPH_ENTRIES {
            if bits[i] != 0 {
                entries[i] = CellClass::Lit;
            }
            i += 1;
        }
        Self { entries }
    }

    pub fn entries(&self) -> &[CellClass; GLYPH_ENTRIES] {
        &self.entries
    }

    /// Class of the entry covering block cell `(row, col)`.
    pub fn class_at(&self, row: u16, col: u16) -> CellClass {
        debug_assert!(row < GLYPH_ROWS && col < GLYPH_COLS);
        self.entries[(row * (GLYPH_COLS / CELL_SPAN) + col / CELL_SPAN) as usize]
    }

    /// Iterate the 30 block cells as `(row, col, class)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (u16, u16, CellClass)> + '_ {
        (0..GLYPH_ROWS).flat_map(move |row| {
            (0..GLYPH_COLS).map(move |col| (row, col, self.class_at(row, col)))
        })
    }
}

#[rustfmt::skip]
static DIGITS: [Glyph; 10] = [
    Glyph::from_bits([1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1]), // 0
    Glyph::from_bits([0,0,1, 0,0,1, 0,0,1, 0,0,1, 0,0,1]), // 1
    Glyph::from_bits([1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1]), // 2
    Glyph::from_bits([1,1,1, 0,0,1, 1,1,1, 0,0,1, 1,1,1]), // 3
    Glyph::from_bits([1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1]), // 4
    Glyph::from_bits([1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1]), // 5
    Glyph::from_bits([1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1]), // 6
    Glyph::from_bits([1,1,1, 0,0,1, 0,0,1, 0,0,1, 0,0,1]), // 7
    Glyph::from_bits([1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1]), // 8
    Glyph::from_bits([1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1]), // 9
];

/// Block pattern for `digit`.
///
/// # Panics
///
/// Panics if `digit > 9`; callers only ever pass digits taken from a `Time`.
pub fn pattern_for(digit: u8) -> &'static Glyph {
    assert!(digit <= 9, "digit out of range: {digit}");
    &DIGITS[digit as usize]
}
