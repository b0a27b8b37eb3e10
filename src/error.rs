use std::fmt;
use std::io;

use thiserror::Error;

/// One of the four numeric subfields of a `HH:MM:SS,mmm` timecode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimecodePart {
    Hours,
    Minutes,
    Seconds,
    Milliseconds,
}

impl fmt::Display for TimecodePart {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TimecodePart::Hours => "hours",
            TimecodePart::Minutes => "minutes",
            TimecodePart::Seconds => "seconds",
            TimecodePart::Milliseconds => "milliseconds",
        };
        write!(fmt, "{}", name)
    }
}

/// Which side of a `-->` time range a timecode came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Appear,
    Disappear,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Appear => write!(fmt, "appear"),
            Endpoint::Disappear => write!(fmt, "disappear"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimecodeError {
    #[error("expected exactly one comma in timecode '{value}', found {found}")]
    CommaCount { value: String, found: usize },
    #[error("expected exactly two colons in timecode '{value}', found {found}")]
    ColonCount { value: String, found: usize },
    #[error("{part} field '{value}' is not a non-negative integer")]
    NotAnInteger { part: TimecodePart, value: String },
    #[error("timecode '{value}' does not fit in a millisecond offset")]
    OutOfRange { value: String },
}

/// A single field of a block failed syntactic validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("index field '{value}' is not an integer")]
    Index { value: String },
    #[error("time range '{value}' must contain exactly one '-->' separator, found {found}")]
    TimeRange { value: String, found: usize },
    #[error("invalid {endpoint} time")]
    Timecode {
        endpoint: Endpoint,
        #[source]
        source: TimecodeError,
    },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed block starting at line {line}")]
    Format {
        line: usize,
        #[source]
        source: FormatError,
    },
    #[error("input ended inside the block starting at line {line}")]
    Truncated { line: usize },
    #[error("failed to read line {line}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhraseError {
    #[error("no subtitle contains the word '{word}'")]
    Unsatisfiable { word: String },
}
