// Author: Dustin Pilgrim
// License: MIT

use std::io;

use thiserror::Error;

use crate::value::ValueType;

/// Source identifier used when the configuration text did not come from a file.
pub const STRING_SOURCE: &str = ":string:";

/// The main error type for lexing, parsing, typed access and decoding.
///
/// `Syntax` is the only positioned variant: the others describe the in-memory
/// store, not source text.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Raised by the lexer or the parser on malformed input.
    #[error("{source_name}:{line}:{column}: {message}")]
    Syntax {
        source_name: String,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("'{section}': unknown section")]
    UnknownSection { section: String },

    #[error("'{path}': unknown option")]
    UnknownOption { path: String },

    /// A typed accessor found the option but it holds another type.
    #[error("'{path}': not {}", .expected.description())]
    NotA { path: String, expected: ValueType },

    #[error("'{path}': value of type {actual} is not assignable to type {expected}")]
    TypeMismatch {
        path: String,
        expected: ValueType,
        actual: ValueType,
    },

    #[error("'{path}': field '{field}' has unsupported type {type_name}")]
    UnsupportedFieldType {
        path: String,
        field: String,
        type_name: String,
    },

    #[error("'{field}': cannot set value of unexported struct field")]
    UnwritableField { field: String },

    #[error("'{field}': embedded pointer fields are not supported")]
    EmbeddedPointer { field: String },

    #[error("'{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("json export failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn syntax(
        source_name: &str,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        ConfigError::Syntax {
            source_name: source_name.to_string(),
            line,
            column,
            message: message.into(),
        }
    }

    /// Position of a syntax error as `(line, column)`, both 1-based.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            ConfigError::Syntax { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }

    /// The bare diagnostic of a syntax error, without the source prefix.
    pub fn syntax_message(&self) -> Option<&str> {
        match self {
            ConfigError::Syntax { message, .. } => Some(message),
            _ => None,
        }
    }
}
