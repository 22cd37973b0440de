//! Painting digits, separator dots and the caption onto a [`Surface`].

use crate::{
    glyph::{pattern_for, CellClass, Glyph},
    layout::{CAPTION_HEIGHT, DIGIT_COLUMNS, DIGIT_ROW, SEPARATOR_COLUMNS, SEPARATOR_ROWS},
    time::{Mode, Time},
    Cell, Surface,
};

/// Maps cell classes to color pairs for the current clock color.
///
/// `None` stands for the terminal's default color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColorScheme {
    pub color: u8,
}

impl ColorScheme {
    pub fn new(color: u8) -> Self {
        Self { color }
    }

    /// `(foreground, background)` for a class.
    pub fn pair(&self, class: CellClass) -> (Option<u8>, Option<u8>) {
        match class {
            CellClass::Off => (None, None),
            CellClass::Lit => (None, Some(self.color)),
            CellClass::Dim => (Some(self.color), None),
        }
    }

    pub fn cell(&self, class: CellClass, blink: bool) -> Cell {
        let (fg, bg) = self.pair(class);
        Cell::new(' ', fg, bg, blink)
    }
}

/// How lit cells of a digit are painted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DigitStyle {
    pub blink: bool,
    /// Class substituted for [`CellClass::Lit`] entries.
    pub lit_as: CellClass,
}

impl Default for DigitStyle {
    fn default() -> Self {
        Self {
            blink: false,
            lit_as: CellClass::Lit,
        }
    }
}

/// Paint one digit's block with its top-left corner at `(row, col)`.
pub fn draw_digit<S: Surface>(
    surface: &mut S,
    glyph: &Glyph,
    row: u16,
    col: u16,
    style: DigitStyle,
    scheme: &ColorScheme,
) -> Result<(), S::Error> {
    for (r, c, class) in glyph.cells() {
        let class = match class {
            CellClass::Lit => style.lit_as,
            other => other,
        };
        surface.put(row + r, col + c, scheme.cell(class, style.blink))?;
    }
    Ok(())
}

/// Paint the two dots of a separator whose left edge is frame column `col`.
pub fn draw_separator<S: Surface>(
    surface: &mut S,
    col: u16,
    class: CellClass,
    blink: bool,
    scheme: &ColorScheme,
) -> Result<(), S::Error> {
    let cell = scheme.cell(class, blink);
    for row in SEPARATOR_ROWS {
        surface.put_str(row, col, "  ", cell)?;
    }
    Ok(())
}

/// Everything that varies between two paints of the frame.
#[derive(Copy, Clone, Debug)]
pub struct FrameStyle {
    pub scheme: ColorScheme,
    pub blink: bool,
    pub show_seconds: bool,
    /// Wall-clock second parity; drives the separator and zero blink.
    pub even_second: bool,
}

/// Paint all digits and separators of `time` into a frame surface.
pub fn draw_time<S: Surface>(
    surface: &mut S,
    time: &Time,
    style: &FrameStyle,
) -> Result<(), S::Error> {
    let dots = if style.even_second {
        CellClass::Dim
    } else {
        CellClass::Lit
    };
    let finished = time.mode == Mode::Countdown && time.is_zero();
    let lit_as = if style.even_second && finished {
        CellClass::Dim
    } else {
        CellClass::Lit
    };
    let digit_style = DigitStyle {
        blink: style.blink,
        lit_as,
    };

    let groups = if style.show_seconds { 3 } else { 2 };
    for (i, (&digit, &col)) in time.digits().iter().zip(&DIGIT_COLUMNS).enumerate() {
        if i / 2 >= groups {
            break;
        }
        draw_digit(
            surface,
            pattern_for(digit),
            DIGIT_ROW,
            col,
            digit_style,
            &style.scheme,
        )?;
    }
    for &col in &SEPARATOR_COLUMNS[..groups - 1] {
        draw_separator(surface, col, dots, style.blink, &style.scheme)?;
    }
    Ok(())
}

/// Write the caption text on the middle row of the caption window.
pub fn draw_caption<S: Surface>(
    surface: &mut S,
    text: &str,
    scheme: &ColorScheme,
    bold: bool,
) -> Result<(), S::Error> {
    let style = scheme.cell(CellClass::Dim, false).with_bold(bold);
    surface.put_str(CAPTION_HEIGHT / 2, 1, text, style)
}
