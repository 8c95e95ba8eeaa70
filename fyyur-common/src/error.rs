//! Common error types for Fyyur

use thiserror::Error;

/// Common result type for Fyyur operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across Fyyur crates
#[derive(Error, Debug)]
pub enum Error {
    /// Storage failure (connection errors, constraint violations)
    #[error("Database error: {0}")]
    Persistence(#[from] sqlx::Error),

    /// A show that does not resolve to both a venue and an artist
    #[error("Invalid show reference{}: {reason}", show_suffix(.show_id))]
    InvalidShowReference {
        show_id: Option<i64>,
        reason: String,
    },

    /// Stored JSON column could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

fn show_suffix(show_id: &Option<i64>) -> String {
    match show_id {
        Some(id) => format!(" (show {})", id),
        None => String::new(),
    }
}

impl Error {
    /// Build an [`Error::InvalidShowReference`] for a show being created
    pub fn dangling_reference(reason: impl Into<String>) -> Self {
        Error::InvalidShowReference {
            show_id: None,
            reason: reason.into(),
        }
    }
}
