//! Error types for interval construction, rendering and parsing.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    #[error("Start after end: {0}")]
    InvalidRange(String),

    #[error("Parse error at offset {offset}: {message}")]
    Parse { offset: usize, message: String },

    #[error("Cannot parse empty text as interval")]
    EmptyInput,

    #[error("Invalid interval pattern: {0}")]
    InvalidPattern(String),

    #[error("Formatting error: {0}")]
    Format(String),
}

impl IntervalError {
    /// Byte offset of a parse failure, if this is one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            IntervalError::Parse { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, IntervalError>;
