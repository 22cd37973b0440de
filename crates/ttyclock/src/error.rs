use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClockError {
    #[error("invalid character {ch:?} at position {position} in time argument")]
    InvalidCharacter { ch: char, position: usize },
    /// `field` counts colon-separated fields from 1, left to right.
    #[error("too many digits in field {field} of time argument")]
    TooManyDigits { field: usize },
    #[error("time argument is zero")]
    ZeroDuration,
    #[error("invalid date format: {0}")]
    InvalidDateFormat(String),
    #[error("terminal i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClockError>;
