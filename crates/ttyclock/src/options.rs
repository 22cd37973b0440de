#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Highest ANSI color index accepted for the clock color.
pub const MAX_COLOR: u8 = 7;
/// Green.
pub const DEFAULT_COLOR: u8 = 2;

/// User-adjustable display settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Options {
    /// ANSI color index, 0 to 7.
    pub color: u8,
    /// Blink the digits and embolden the caption.
    pub bold: bool,
    /// Draw a box border around the frame and the caption.
    pub boxed: bool,
    pub show_seconds: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            bold: false,
            boxed: false,
            show_seconds: true,
        }
    }
}

impl Options {
    /// Set the color if `index` is in 0..=7. Out-of-range values are ignored
    /// and the current color is kept; returns whether the value was applied.
    pub fn set_color(&mut self, index: i64) -> bool {
        match u8::try_from(index) {
            Ok(color) if color <= MAX_COLOR => {
                self.color = color;
                true
            }
            _ => {
                debug!(index, kept = self.color, "ignoring out-of-range color");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_range_is_enforced() {
        let mut o = Options::default();
        assert!(o.set_color(5));
        assert_eq!(o.color, 5);
        assert!(!o.set_color(8));
        assert!(!o.set_color(-1));
        assert_eq!(o.color, 5);
    }
}
