//! ttyclock: block-digit terminal clock and countdown engine.
//! Glyph table, digit renderer, window layout and time model, plus the
//! `App` state that ties them together for a terminal front end.

pub mod app;
mod error;
pub mod glyph;
pub mod layout;
mod options;
pub mod render;
pub mod screen;
pub mod ticker;
pub mod time;
mod window;

pub use app::{App, Command};
pub use error::{ClockError, Result};
pub use glyph::{pattern_for, CellClass, Glyph};
pub use layout::{Geometry, Layout};
pub use options::Options;
pub use render::ColorScheme;
pub use screen::Screen;
pub use time::{Mode, Time};
pub use window::Window;

// Test utilities
pub mod test_support;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<u8>,
    pub bg: Option<u8>,
    pub blink: bool,
    pub bold: bool,
}

impl Cell {
    pub fn new(ch: char, fg: Option<u8>, bg: Option<u8>, blink: bool) -> Self {
        Self {
            ch,
            fg,
            bg,
            blink,
            bold: false,
        }
    }

    pub fn blank() -> Self {
        Self::new(' ', None, None, false)
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}

/// Anything a digit or caption can be painted onto.
pub trait Surface {
    type Error;
    fn put(&mut self, row: u16, col: u16, cell: Cell) -> std::result::Result<(), Self::Error>;

    /// Write a run of characters starting at `(row, col)`, all sharing the
    /// attributes of `style`.
    fn put_str(
        &mut self,
        row: u16,
        col: u16,
        text: &str,
        style: Cell,
    ) -> std::result::Result<(), Self::Error> {
        for (i, ch) in text.chars().enumerate() {
            let Ok(offset) = u16::try_from(i) else {
                break;
            };
            self.put(row, col.saturating_add(offset), Cell { ch, ..style })?;
        }
        Ok(())
    }
}
