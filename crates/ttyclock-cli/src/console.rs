use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::debug;
use ttyclock::{
    screen::{visible_area, visible_cells},
    Cell, Geometry, Screen, Window,
};

/// The real terminal: alternate screen, raw mode, hidden cursor.
///
/// Dropping it puts the terminal back the way it was found.
pub struct ConsoleScreen {
    out: Stdout,
    rows: u16,
    cols: u16,
    /// Attributes of the last cell written, to skip redundant escapes.
    pen: Option<Cell>,
}

fn color(index: Option<u8>) -> Color {
    index.map_or(Color::Reset, Color::AnsiValue)
}

impl ConsoleScreen {
    pub fn enter() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        let entered = execute!(
            out,
            EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        );
        let (cols, rows) = undo_on_err(entered.and_then(|()| terminal::size()), restore_terminal)?;
        debug!(rows, cols, "terminal initialised");
        Ok(Self {
            out,
            rows,
            cols,
            pen: None,
        })
    }

    /// Record a new terminal size reported by a resize event and wipe the
    /// screen so nothing stale survives the re-layout.
    pub fn set_size(&mut self, rows: u16, cols: u16) -> io::Result<()> {
        self.rows = rows;
        self.cols = cols;
        self.pen = None;
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(Color::Reset),
            SetBackgroundColor(Color::Reset),
            terminal::Clear(ClearType::All)
        )
    }

    fn write_cell(&mut self, row: u16, col: u16, cell: &Cell) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(col, row))?;
        let same_pen = self.pen.is_some_and(|p| {
            p.fg == cell.fg && p.bg == cell.bg && p.blink == cell.blink && p.bold == cell.bold
        });
        if !same_pen {
            queue!(self.out, SetAttribute(Attribute::Reset))?;
            if cell.blink {
                queue!(self.out, SetAttribute(Attribute::SlowBlink))?;
            }
            if cell.bold {
                queue!(self.out, SetAttribute(Attribute::Bold))?;
            }
            queue!(
                self.out,
                SetForegroundColor(color(cell.fg)),
                SetBackgroundColor(color(cell.bg))
            )?;
            self.pen = Some(*cell);
        }
        queue!(self.out, Print(cell.ch))
    }
}

impl Screen for ConsoleScreen {
    fn size(&self) -> io::Result<(u16, u16)> {
        Ok((self.rows, self.cols))
    }

    fn blit(&mut self, geometry: &Geometry, window: &Window) -> io::Result<()> {
        let (rows, cols) = (self.rows, self.cols);
        for (row, col, cell) in visible_cells(geometry, window, rows, cols) {
            self.write_cell(row, col, cell)?;
        }
        Ok(())
    }

    fn clear(&mut self, geometry: &Geometry) -> io::Result<()> {
        let blank = Cell::blank();
        let (rows, cols) = (self.rows, self.cols);
        for (row, col) in visible_area(geometry, rows, cols) {
            self.write_cell(row, col, &blank)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl Drop for ConsoleScreen {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Run `undo` if a half-finished setup failed, then pass the result on.
fn undo_on_err<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

/// Leave the alternate screen and raw mode. Safe to call more than once and
/// from a panic hook.
pub fn restore_terminal() {
    let mut out = io::stdout();
    let _ = execute!(
        out,
        SetAttribute(Attribute::Reset),
        cursor::Show,
        LeaveAlternateScreen
    );
    let _ = terminal::disable_raw_mode();
}
