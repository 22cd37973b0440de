use crate::{error::ClockError, Cell, Surface};

const BORDER_H: char = '─';
const BORDER_V: char = '│';
const CORNERS: [char; 4] = ['┌', '┐', '└', '┘'];

/// An off-screen grid of cells, blitted to the terminal by a [`crate::Screen`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Window {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Window {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::blank(); usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Reset every cell to a blank with the default colors.
    pub fn erase(&mut self) {
        self.cells.fill(Cell::blank());
    }

    /// Change the window size. Contents are discarded.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::blank(); usize::from(width) * usize::from(height)];
    }

    pub fn get(&self, row: u16, col: u16) -> Option<&Cell> {
        (row < self.height && col < self.width)
            .then(|| &self.cells[usize::from(row) * usize::from(self.width) + usize::from(col)])
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: u16) -> &[Cell] {
        if row >= self.height {
            return &[];
        }
        let start = usize::from(row) * usize::from(self.width);
        &self.cells[start..start + usize::from(self.width)]
    }

    /// Text content of one row, ignoring colors.
    pub fn row_text(&self, row: u16) -> String {
        self.row(row).iter().map(|c| c.ch).collect()
    }

    fn set(&mut self, row: u16, col: u16, cell: Cell) {
        if row < self.height && col < self.width {
            let idx = usize::from(row) * usize::from(self.width) + usize::from(col);
            self.cells[idx] = cell;
        }
    }

    /// Draw a line box around the edge, or overwrite the edge with default
    /// blanks when `visible` is false.
    pub fn draw_border(&mut self, visible: bool) {
        if self.width < 2 || self.height < 2 {
            return;
        }
        let (right, bottom) = (self.width - 1, self.height - 1);
        let edge = |ch: char| {
            if visible {
                Cell::new(ch, None, None, false)
            } else {
                Cell::blank()
            }
        };
        for col in 1..right {
            self.set(0, col, edge(BORDER_H));
            self.set(bottom, col, edge(BORDER_H));
        }
        for row in 1..bottom {
            self.set(row, 0, edge(BORDER_V));
            self.set(row, right, edge(BORDER_V));
        }
        self.set(0, 0, edge(CORNERS[0]));
        self.set(0, right, edge(CORNERS[1]));
        self.set(bottom, 0, edge(CORNERS[2]));
        self.set(bottom, right, edge(CORNERS[3]));
    }
}

impl Surface for Window {
    type Error = ClockError;

    fn put(&mut self, row: u16, col: u16, cell: Cell) -> std::result::Result<(), Self::Error> {
        self.set(row, col, cell);
        Ok(())
    }
}
