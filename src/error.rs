//! Error types for the calculator.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the calculator and its input/config layers.
///
/// Arithmetic edge cases (division by zero, square root of a negative
/// number) are not errors; they produce non-finite values instead.
#[derive(Debug, Error)]
pub enum CalcError {
    /// An operator identifier that names no binary or unary operator.
    #[error("invalid operator: {0:?}")]
    InvalidOperator(String),

    /// A digit token outside `0..=9`.
    #[error("invalid digit: {0:?}")]
    InvalidDigit(char),

    /// A piece of input text that maps to no token.
    #[error("unknown input token: {0:?}")]
    UnknownToken(String),

    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, CalcError>;
