//! Switcher error types

use thiserror::Error;

/// Text shown when a listing failure carries no message of its own
pub const GENERIC_FETCH_MESSAGE: &str = "Failed to list files.";

/// Errors produced while fetching the project file list
#[derive(Debug, Error)]
pub enum FetchError {
    /// The listing backend rejected with a plain message
    #[error("{0}")]
    Message(String),

    /// The requested root is not a directory
    #[error("Path is not a directory: {0}")]
    NotADirectory(String),

    /// IO error while starting or running the listing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The listing worker went away without reporting a result
    #[error("File listing worker disconnected")]
    Disconnected,
}

impl FetchError {
    /// Text surfaced to the user for this failure
    ///
    /// Message-carrying failures are shown verbatim; structured failures
    /// fall back to [`GENERIC_FETCH_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Message(_) | Self::NotADirectory(_) => self.to_string(),
            Self::Io(_) | Self::Disconnected => GENERIC_FETCH_MESSAGE.to_string(),
        }
    }
}

impl From<String> for FetchError {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for FetchError {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

/// Result type for file listing
pub type FetchResult<T> = std::result::Result<T, FetchError>;
