//! Crate error type.

use std::num::ParseIntError;

use thiserror::Error as ThisError;

/// Why a single `x,y` line failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum PointParseError {
    #[error("expected `x,y`, got {0:?}")]
    Shape(String),
    #[error("invalid {axis} coordinate {value:?}: {reason}")]
    Coordinate {
        axis: char,
        value: String,
        reason: ParseIntError,
    },
}

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Malformed coordinate input. `line` is 1-based.
    #[error("parse error on line {line}: {reason}")]
    Parse { line: usize, reason: PointParseError },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("invalid route: {0}")]
    InvalidRoute(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn parse(line: usize, reason: PointParseError) -> Self {
        Self::Parse { line, reason }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    pub fn invalid_route(message: impl Into<String>) -> Self {
        Self::InvalidRoute(message.into())
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
