use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Errors returned by the little-endian hex integer codec.
///
/// # Examples
/// ```
/// use irfile_core::{HexError, decode_le_hex32};
///
/// let err = decode_le_hex32("00 01").unwrap_err();
/// assert!(matches!(err, HexError::ByteCount { count: 2 }));
/// ```
#[derive(Debug, Error)]
pub enum HexError {
    #[error("expected 4 bytes, got {count}")]
    ByteCount { count: usize },
    #[error("invalid hex byte {token:?}")]
    InvalidDigit { token: String },
    #[error("invalid hex byte {token:?}: {source}")]
    InvalidByte {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Errors returned by [`parse`](crate::parse).
///
/// Every variant carries the 1-based line number of the offending field and
/// the underlying conversion failure as its source. Any one of them aborts the
/// whole parse.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid address at line {line}: {source}")]
    MalformedAddress {
        line: usize,
        #[source]
        source: HexError,
    },
    #[error("invalid command at line {line}: {source}")]
    MalformedCommand {
        line: usize,
        #[source]
        source: HexError,
    },
    #[error("invalid frequency at line {line}: {source}")]
    MalformedFrequency {
        line: usize,
        #[source]
        source: ParseIntError,
    },
    #[error("invalid duty_cycle at line {line}: {source}")]
    MalformedDutyCycle {
        line: usize,
        #[source]
        source: ParseFloatError,
    },
    #[error("invalid data sample {token:?} at line {line}: {source}")]
    MalformedDataSample {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

impl ParseError {
    /// 1-based line number the error was raised on.
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedAddress { line, .. }
            | ParseError::MalformedCommand { line, .. }
            | ParseError::MalformedFrequency { line, .. }
            | ParseError::MalformedDutyCycle { line, .. }
            | ParseError::MalformedDataSample { line, .. } => *line,
        }
    }
}
