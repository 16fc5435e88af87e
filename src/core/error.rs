//! Error types for the cinematch library.

use thiserror::Error;

/// Result type alias using cinematch's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading data or serving recommendations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error reading the data file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Required columns absent from the source table. Fatal at load; the
    /// pipeline never runs on a partial schema.
    #[error("missing required columns: {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    /// Malformed row in the source table.
    #[error("data error: {message}")]
    Data { message: String },

    /// Query did not resolve to any catalog title above the threshold.
    /// Recoverable; surfaced to the user, does not affect built state.
    #[error("no title matching \"{query}\" was found in the catalog")]
    NoMatchFound { query: String },

    /// A matrix index with no corresponding catalog row.
    #[error("catalog has no entry at index {index}")]
    Lookup { index: usize },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Create a new data error.
    pub fn data(message: impl Into<String>) -> Self {
        Self::Data {
            message: message.into(),
        }
    }

    /// Create a new config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a no-match error for the given query.
    pub fn no_match(query: impl Into<String>) -> Self {
        Self::NoMatchFound {
            query: query.into(),
        }
    }

    /// True for errors a caller can recover from by asking the user to
    /// rephrase, as opposed to internal or load-time failures.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::NoMatchFound { .. })
    }
}
