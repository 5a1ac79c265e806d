//! Error types for the interaction controllers.
//!
//! Carousel errors are caller misuse (bad catalog, bad index). Settings and
//! form errors wrap the I/O that surrounds the controllers.

use thiserror::Error;

/// Errors raised by carousel construction and navigation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// The carousel was built from an empty catalog
    #[error("carousel catalog is empty")]
    EmptyCatalog,

    /// A jump targeted an index outside the catalog
    #[error("index {index} is out of range for {len} items")]
    InvalidIndex { index: i64, len: usize },

    /// A card index attribute could not be read as a number
    #[error("card index {0:?} is not a number")]
    UnparsableIndex(String),
}

/// Result type alias for carousel operations
pub type CarouselResult<T> = Result<T, CarouselError>;

/// Errors that can occur while loading or watching settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// File watcher could not be set up
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),

    /// A value is outside its allowed range
    #[error("invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Errors from the contact form submission lifecycle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Submit pressed while a submission is still in flight
    #[error("a submission is already in progress")]
    AlreadySending,

    /// Completion reported with no submission in flight
    #[error("no submission is in progress")]
    NotSending,

    /// The endpoint answered with a non-success status
    #[error("endpoint answered with status {0}")]
    Status(u16),

    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<String> for FormError {
    fn from(s: String) -> Self {
        FormError::Transport(s)
    }
}

impl From<&str> for FormError {
    fn from(s: &str) -> Self {
        FormError::Transport(s.to_string())
    }
}
