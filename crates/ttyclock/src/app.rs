//! Application state and the per-tick flow: advance the time model, keep the
//! windows laid out for the current caption, paint, and present.

use std::fmt::{Display, Write};

use chrono::{
    format::{Item, StrftimeItems},
    DateTime, Local, TimeZone,
};
use tracing::{debug, info};

use crate::{
    error::{ClockError, Result},
    layout::{frame_width, Layout, CAPTION_HEIGHT, FRAME_HEIGHT},
    options::Options,
    render::{draw_caption, draw_time, ColorScheme, FrameStyle},
    screen::Screen,
    time::{Mode, Time},
    window::Window,
};

/// Runtime keyboard commands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    ToggleBold,
    ToggleBox,
    ToggleSeconds,
    SetColor(u8),
}

impl Command {
    /// Map a key to its command; unbound keys yield `None`.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'q' | 'Q' => Some(Command::Quit),
            'b' | 'B' => Some(Command::ToggleBold),
            'x' | 'X' => Some(Command::ToggleBox),
            's' | 'S' => Some(Command::ToggleSeconds),
            '0'..='7' => key.to_digit(10).map(|d| Command::SetColor(d as u8)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
enum CaptionSource {
    /// Local date rendered with a strftime format.
    Date(String),
    /// Text fixed at startup.
    Fixed(String),
}

fn check_date_format(format: &str) -> Result<()> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(ClockError::InvalidDateFormat(format.to_string()));
    }
    Ok(())
}

fn format_date<Tz: TimeZone>(now: &DateTime<Tz>, format: &str) -> Result<String>
where
    Tz::Offset: Display,
{
    let mut out = String::new();
    write!(out, "{}", now.format(format))
        .map_err(|_| ClockError::InvalidDateFormat(format.to_string()))?;
    Ok(out)
}

pub struct App {
    time: Time,
    options: Options,
    source: CaptionSource,
    caption: String,
    frame: Window,
    caption_window: Window,
    layout: Layout,
    terminal: (u16, u16),
    running: bool,
}

impl App {
    /// Wall clock with the date as caption.
    pub fn clock(options: Options, date_format: impl Into<String>) -> Result<Self> {
        let format = date_format.into();
        check_date_format(&format)?;
        let caption = format_date(&Local::now(), &format)?;
        Ok(Self::new(
            Time::now(),
            options,
            CaptionSource::Date(format),
            caption,
        ))
    }

    /// Countdown from `start`, with the starting duration as caption.
    pub fn timer(options: Options, start: Time) -> Result<Self> {
        if start.is_zero() {
            return Err(ClockError::ZeroDuration);
        }
        let time = Time {
            mode: Mode::Countdown,
            ..start
        };
        let caption = time.to_string();
        Ok(Self::new(
            time,
            options,
            CaptionSource::Fixed(caption.clone()),
            caption,
        ))
    }

    fn new(time: Time, options: Options, source: CaptionSource, caption: String) -> Self {
        let width = frame_width(options.show_seconds);
        let layout = Layout::at(0, 0, width, caption.chars().count());
        Self {
            time,
            options,
            source,
            caption,
            frame: Window::new(width, FRAME_HEIGHT),
            caption_window: Window::new(layout.caption.width, CAPTION_HEIGHT),
            layout,
            terminal: (0, 0),
            running: true,
        }
    }

    pub fn time(&self) -> &Time {
        &self.time
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn content_width(&self) -> usize {
        self.caption.chars().count()
    }

    /// Query the screen size and place the windows for the first time.
    pub fn start<S: Screen>(&mut self, screen: &mut S) -> Result<()> {
        let (rows, cols) = screen.size()?;
        debug!(rows, cols, "starting");
        self.resize(screen, rows, cols)
    }

    /// Re-center both windows on a terminal of the new size.
    pub fn resize<S: Screen>(&mut self, screen: &mut S, rows: u16, cols: u16) -> Result<()> {
        debug!(rows, cols, "terminal resized");
        self.terminal = (rows, cols);
        self.recenter(screen)
    }

    fn recenter<S: Screen>(&mut self, screen: &mut S) -> Result<()> {
        let (rows, cols) = self.terminal;
        let layout = Layout::centered(
            frame_width(self.options.show_seconds),
            self.content_width(),
            rows,
            cols,
        );
        self.apply_layout(screen, layout)
    }

    /// Erase both windows at their old place, then move and resize them.
    fn apply_layout<S: Screen>(&mut self, screen: &mut S, layout: Layout) -> Result<()> {
        screen.clear(&self.layout.frame)?;
        screen.clear(&self.layout.caption)?;
        screen.flush()?;

        self.frame.resize(layout.frame.width, layout.frame.height);
        self.caption_window.resize(layout.caption.width, layout.caption.height);
        self.layout = layout;
        Ok(())
    }

    /// Move the model forward by `ticks` elapsed seconds.
    ///
    /// The clock resynchronizes from `now`. The countdown decrements once per
    /// tick and stops at zero.
    pub fn advance<Tz: TimeZone>(&mut self, ticks: u32, now: &DateTime<Tz>) -> Result<()>
    where
        Tz::Offset: Display,
    {
        match self.time.mode {
            Mode::Clock => {
                self.time.set_from(now);
                if let CaptionSource::Date(format) = &self.source {
                    self.caption = format_date(now, format)?;
                }
            }
            Mode::Countdown => {
                for _ in 0..ticks {
                    if self.time.is_zero() {
                        break;
                    }
                    self.time.decrement_one_second();
                    if self.time.is_zero() {
                        info!(duration = %self.caption, "countdown finished");
                    }
                }
            }
        }
        Ok(())
    }

    /// Paint the current state and present it.
    ///
    /// `even_second` is the wall-clock second parity that drives blinking.
    pub fn redraw<S: Screen>(&mut self, screen: &mut S, even_second: bool) -> Result<()> {
        if usize::from(self.layout.caption.width) != self.content_width() + 2 {
            self.recenter(screen)?;
        }

        let scheme = ColorScheme::new(self.options.color);
        let style = FrameStyle {
            scheme,
            blink: self.options.bold,
            show_seconds: self.options.show_seconds,
            even_second,
        };

        self.frame.erase();
        if self.options.boxed {
            self.frame.draw_border(true);
        }
        draw_time(&mut self.frame, &self.time, &style)?;

        self.caption_window.erase();
        if self.options.boxed {
            self.caption_window.draw_border(true);
        }
        draw_caption(
            &mut self.caption_window,
            &self.caption,
            &scheme,
            self.options.bold,
        )?;

        screen.blit(&self.layout.frame, &self.frame)?;
        screen.blit(&self.layout.caption, &self.caption_window)?;
        screen.flush()?;
        Ok(())
    }

    /// Apply a keyboard command.
    pub fn handle<S: Screen>(&mut self, screen: &mut S, command: Command) -> Result<()> {
        debug!(?command, "command");
        match command {
            Command::Quit => self.running = false,
            Command::ToggleBold => self.options.bold = !self.options.bold,
            Command::ToggleBox => self.options.boxed = !self.options.boxed,
            Command::ToggleSeconds => {
                self.options.show_seconds = !self.options.show_seconds;
                let width = frame_width(self.options.show_seconds);
                let shifted = self
                    .layout
                    .shift_for_width(width, self.content_width(), self.terminal.1);
                self.apply_layout(screen, shifted)?;
                self.recenter(screen)?;
            }
            Command::SetColor(index) => {
                self.options.set_color(i64::from(index));
            }
        }
        Ok(())
    }
}
