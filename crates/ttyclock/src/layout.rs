//! Placement of the digit frame and the caption window.
//!
//! Frame columns, with seconds shown:
//!
//! ```text
//!  col  0  1-6  8-13  16-17  20-25  27-32  35-36  39-44  46-51  53
//!       |  H    H     :      M      M      :      S      S      |
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const FRAME_HEIGHT: u16 = 7;
/// Frame width when only hours and minutes are drawn.
pub const NORM_FRAME_WIDTH: u16 = 35;
/// Frame width with the seconds group.
pub const SEC_FRAME_WIDTH: u16 = 54;
pub const CAPTION_HEIGHT: u16 = 3;

/// Frame columns where each of the six digits starts.
pub const DIGIT_COLUMNS: [u16; 6] = [1, 8, 20, 27, 39, 46];
/// Frame columns of the hour:minute and minute:second dots.
pub const SEPARATOR_COLUMNS: [u16; 2] = [16, NORM_FRAME_WIDTH];
/// Frame rows of the upper and lower dot of a separator.
pub const SEPARATOR_ROWS: [u16; 2] = [2, 4];
/// Frame row of the top of every digit block.
pub const DIGIT_ROW: u16 = 1;

pub fn frame_width(show_seconds: bool) -> u16 {
    if show_seconds {
        SEC_FRAME_WIDTH
    } else {
        NORM_FRAME_WIDTH
    }
}

/// Position and size of one window, in terminal cells.
///
/// `row`/`col` may be negative when the terminal is smaller than the window.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Geometry {
    pub row: i32,
    pub col: i32,
    pub width: u16,
    pub height: u16,
    /// Horizontal scale factor, reserved for aspect adjustment.
    pub a: u16,
    /// Vertical scale factor, reserved for aspect adjustment.
    pub b: u16,
}

impl Geometry {
    pub fn new(row: i32, col: i32, width: u16, height: u16) -> Self {
        Self {
            row,
            col,
            width,
            height,
            a: 1,
            b: 1,
        }
    }

    pub fn bottom(&self) -> i32 {
        self.row + i32::from(self.height)
    }
}

/// Frame and caption geometry, always computed together.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Layout {
    pub frame: Geometry,
    pub caption: Geometry,
}

fn caption_width(content_width: usize) -> u16 {
    u16::try_from(content_width)
        .unwrap_or(u16::MAX - 2)
        .saturating_add(2)
}

impl Layout {
    /// Place a frame at `(row, col)` and hang the caption under it.
    ///
    /// The caption's top row overlaps the frame's bottom border row.
    pub fn at(row: i32, col: i32, frame_width: u16, content_width: usize) -> Self {
        let frame = Geometry::new(row, col, frame_width, FRAME_HEIGHT);
        let width = caption_width(content_width);
        let caption = Geometry::new(
            frame.bottom() - 1,
            frame.col + i32::from(frame.width / 2) - i32::from(width / 2),
            width,
            CAPTION_HEIGHT,
        );
        Self { frame, caption }
    }

    /// Center the frame and caption stack on a `rows` x `cols` terminal.
    pub fn centered(frame_width: u16, content_width: usize, rows: u16, cols: u16) -> Self {
        let stack_height = FRAME_HEIGHT + CAPTION_HEIGHT - 1;
        let row = i32::from(rows / 2) - i32::from(stack_height / 2);
        let col = i32::from(cols / 2) - i32::from(frame_width / 2);
        let layout = Self::at(row, col, frame_width, content_width);
        debug!(rows, cols, frame = ?layout.frame, caption = ?layout.caption, "layout centered");
        layout
    }

    /// Resize the frame to `new_width`, first pulling it left far enough to
    /// fit on a `cols`-wide terminal.
    pub fn shift_for_width(&self, new_width: u16, content_width: usize, cols: u16) -> Self {
        let limit = i32::from(cols) - i32::from(new_width) - 1;
        let mut col = self.frame.col;
        while col > limit {
            col -= 1;
        }
        Self::at(self.frame.row, col, new_width, content_width)
    }
}
