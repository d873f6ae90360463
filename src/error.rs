//! Adapter error type.
//!
//! Only malformed input is an error. Absent inputs are reported through
//! [`LoadOutcome::Absent`](crate::traits::LoadOutcome::Absent) instead, and
//! unknown vocabulary is passed through silently.

use thiserror::Error;

use crate::coords::CoordError;

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("{authority}: malformed record at line {line}: {reason}")]
    Malformed {
        authority: String,
        line: usize,
        reason: String,
    },

    #[error("{authority}: malformed coordinate at line {line}: {source}")]
    Coordinate {
        authority: String,
        line: usize,
        #[source]
        source: CoordError,
    },

    #[error("{authority}: table has no column '{column}'")]
    MissingColumn { authority: String, column: String },

    #[error("{authority}: invalid XML: {reason}")]
    Xml { authority: String, reason: String },

    #[error("{authority}: invalid JSON: {source}")]
    Json {
        authority: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AdapterError {
    pub fn malformed(authority: &str, line: usize, reason: impl Into<String>) -> Self {
        AdapterError::Malformed {
            authority: authority.to_string(),
            line,
            reason: reason.into(),
        }
    }

    pub fn coordinate(authority: &str, line: usize, source: CoordError) -> Self {
        AdapterError::Coordinate {
            authority: authority.to_string(),
            line,
            source,
        }
    }

    pub fn json(authority: &str, source: serde_json::Error) -> Self {
        AdapterError::Json {
            authority: authority.to_string(),
            source,
        }
    }
}
