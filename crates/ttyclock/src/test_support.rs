//! Test support utilities for ttyclock.
//!
//! This module provides helper types that are useful for testing layout and
//! rendering without a terminal, but are not part of the public API.

use std::io;

use crate::{
    layout::Geometry,
    screen::{visible_area, visible_cells, Screen},
    Cell, Window,
};

/// An in-memory terminal.
///
/// Captures blitted windows into a grid of cells that can be inspected.
pub struct MemoryScreen {
    pub rows: u16,
    pub cols: u16,
    pub cells: Vec<Vec<Cell>>,
    pub flushes: usize,
}

impl MemoryScreen {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![vec![Cell::blank(); usize::from(cols)]; usize::from(rows)],
            flushes: 0,
        }
    }

    /// Change the reported size, dropping all content as a real terminal
    /// does on resize.
    pub fn set_size(&mut self, rows: u16, cols: u16) {
        *self = Self {
            flushes: self.flushes,
            ..Self::new(rows, cols)
        };
    }

    pub fn cell(&self, row: u16, col: u16) -> Cell {
        self.cells[usize::from(row)][usize::from(col)]
    }

    /// Text of one screen row, ignoring colors.
    pub fn line(&self, row: u16) -> String {
        self.cells[usize::from(row)].iter().map(|c| c.ch).collect()
    }
}

impl Screen for MemoryScreen {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((self.rows, self.cols))
    }

    fn blit(&mut self, geometry: &Geometry, window: &Window) -> io::Result<()> {
        for (row, col, cell) in visible_cells(geometry, window, self.rows, self.cols) {
            self.cells[usize::from(row)][usize::from(col)] = *cell;
        }
        Ok(())
    }

    fn clear(&mut self, geometry: &Geometry) -> io::Result<()> {
        for (row, col) in visible_area(geometry, self.rows, self.cols) {
            self.cells[usize::from(row)][usize::from(col)] = Cell::blank();
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }
}
