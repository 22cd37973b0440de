//! The terminal as seen by the engine: a grid that windows are copied onto.

use std::io;

use crate::{layout::Geometry, window::Window, Cell};

pub trait Screen {
    /// Terminal size as `(rows, cols)`.
    fn size(&self) -> io::Result<(u16, u16)>;

    /// Copy `window` onto the screen with its top-left corner at
    /// `geometry.row`/`geometry.col`. Cells falling off screen are dropped.
    fn blit(&mut self, geometry: &Geometry, window: &Window) -> io::Result<()>;

    /// Overwrite the area of `geometry` with default blanks.
    fn clear(&mut self, geometry: &Geometry) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}

/// Screen coordinates of every on-screen cell of `window` placed at `geometry`,
/// paired with the cell. Shared by screen implementations for clipping.
pub fn visible_cells<'a>(
    geometry: &'a Geometry,
    window: &'a Window,
    rows: u16,
    cols: u16,
) -> impl Iterator<Item = (u16, u16, &'a Cell)> + 'a {
    (0..window.height()).flat_map(move |r| {
        window.row(r).iter().enumerate().filter_map(move |(c, cell)| {
            let row = geometry.row + i32::from(r);
            let col = geometry.col + i32::try_from(c).ok()?;
            let row = u16::try_from(row).ok().filter(|&v| v < rows)?;
            let col = u16::try_from(col).ok().filter(|&v| v < cols)?;
            Some((row, col, cell))
        })
    })
}

/// On-screen `(row, col)` positions covered by `geometry`.
pub fn visible_area(
    geometry: &Geometry,
    rows: u16,
    cols: u16,
) -> impl Iterator<Item = (u16, u16)> + '_ {
    (0..geometry.height).flat_map(move |r| {
        (0..geometry.width).filter_map(move |c| {
            let row = u16::try_from(geometry.row + i32::from(r))
                .ok()
                .filter(|&v| v < rows)?;
            let col = u16::try_from(geometry.col + i32::from(c))
                .ok()
                .filter(|&v| v < cols)?;
            Some((row, col))
        })
    })
}
