use std::num::ParseIntError;
use thiserror::Error;

/// Errors surfaced by the toolkit. Every operation either succeeds or hands
/// one of these straight back to the caller; nothing is retried.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolkitError {
    #[error("repeat count must not be negative, got {count}")]
    NegativeCount { count: i64 },

    #[error("repeat count {count} is too large to allocate")]
    CountTooLarge { count: i64 },

    #[error("squaring {value} overflows a 64-bit integer")]
    Overflow { value: i64 },

    #[error("cannot convert '{input}' to an integer: {source}")]
    Conversion {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid demo configuration: {0}")]
    Config(String),
}

impl ToolkitError {
    pub fn conversion(input: impl Into<String>, source: ParseIntError) -> Self {
        Self::Conversion {
            input: input.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
