//! Six-digit time model: wall-clock sync, countdown with borrow, and the
//! partial `hh:mm:ss` parser.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, Timelike};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ClockError, Result};

/// Digits in an `hh:mm:ss` value.
pub const TIME_DIGITS: usize = 6;
const FIELD_DIGITS: usize = 2;
const FIELDS: usize = TIME_DIGITS / FIELD_DIGITS;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    #[default]
    Clock,
    Countdown,
}

/// Displayed time as three tens/ones digit pairs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Time {
    pub hour: [u8; 2],
    pub minute: [u8; 2],
    pub second: [u8; 2],
    pub mode: Mode,
}

fn split(value: u32) -> [u8; 2] {
    // Composite values never exceed 99, so both digits fit in a u8.
    [(value / 10 % 10) as u8, (value % 10) as u8]
}

fn join(pair: [u8; 2]) -> u32 {
    u32::from(pair[0]) * 10 + u32::from(pair[1])
}

impl Time {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Build a time from composite values. Each value is taken modulo 100.
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32, mode: Mode) -> Self {
        Self {
            hour: split(hours),
            minute: split(minutes),
            second: split(seconds),
            mode,
        }
    }

    /// A clock-mode time holding the current local time.
    pub fn now() -> Self {
        let mut time = Self::new(Mode::Clock);
        time.sync_from_wall_clock();
        time
    }

    pub fn hours(&self) -> u32 {
        join(self.hour)
    }

    pub fn minutes(&self) -> u32 {
        join(self.minute)
    }

    pub fn seconds(&self) -> u32 {
        join(self.second)
    }

    pub fn total_seconds(&self) -> u32 {
        self.hours() * 3600 + self.minutes() * 60 + self.seconds()
    }

    /// All six digits, most significant first.
    pub fn digits(&self) -> [u8; TIME_DIGITS] {
        [
            self.hour[0],
            self.hour[1],
            self.minute[0],
            self.minute[1],
            self.second[0],
            self.second[1],
        ]
    }

    pub fn is_zero(&self) -> bool {
        self.digits().iter().all(|&d| d == 0)
    }

    pub fn sync_from_wall_clock(&mut self) {
        self.set_from(&Local::now());
    }

    /// Copy hour, minute and second out of any chrono time value.
    pub fn set_from<T: Timelike>(&mut self, t: &T) {
        self.hour = split(t.hour());
        self.minute = split(t.minute());
        // Leap seconds surface as 59 plus a nanosecond overflow, never as 60.
        self.second = split(t.second());
    }

    /// Count down one second, borrowing from minutes and hours.
    ///
    /// At 00:00:00 this wraps to 23:59:59; the control loop checks
    /// [`Time::is_zero`] before calling it.
    pub fn decrement_one_second(&mut self) {
        let mut hours = self.hours();
        let mut minutes = self.minutes();
        let mut seconds = self.seconds();

        if minutes == 0 && seconds == 0 {
            hours = if hours == 0 { 23 } else { hours - 1 };
        }
        if seconds == 0 {
            minutes = if minutes == 0 { 59 } else { minutes - 1 };
        }
        seconds = if seconds == 0 { 59 } else { seconds - 1 };

        self.hour = split(hours);
        self.minute = split(minutes);
        self.second = split(seconds);
    }

    /// Parse a countdown duration such as `"5"`, `"1:30"` or `"12:30:45"`.
    ///
    /// Fields are right-aligned: the last field is always seconds, and a
    /// one-digit field is its ones digit.
    pub fn parse_partial(text: &str) -> Result<Self> {
        let mut fields: Vec<[Option<u8>; FIELD_DIGITS]> = vec![[None; FIELD_DIGITS]];
        let mut filled = 0usize;

        for (position, ch) in text.chars().enumerate() {
            if let Some(d) = ch.to_digit(10) {
                if filled == FIELD_DIGITS {
                    return Err(ClockError::TooManyDigits {
                        field: fields.len(),
                    });
                }
                if let Some(field) = fields.last_mut() {
                    field[filled] = Some(d as u8);
                }
                filled += 1;
            } else if ch == ':' && fields.len() < FIELDS {
                fields.push([None; FIELD_DIGITS]);
                filled = 0;
            } else {
                return Err(ClockError::InvalidCharacter { ch, position });
            }
        }

        let mut pairs = [[0u8; 2]; FIELDS];
        let offset = FIELDS - fields.len();
        for (slot, field) in pairs[offset..].iter_mut().zip(&fields) {
            *slot = match *field {
                [Some(tens), Some(ones)] => [tens, ones],
                [Some(ones), None] => [0, ones],
                _ => [0, 0],
            };
        }

        let [hour, minute, second] = pairs;
        Ok(Self {
            hour,
            minute,
            second,
            mode: Mode::Countdown,
        })
    }
}

impl FromStr for Time {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_partial(s)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}:{}{}:{}{}",
            self.hour[0],
            self.hour[1],
            self.minute[0],
            self.minute[1],
            self.second[0],
            self.second[1]
        )
    }
}
