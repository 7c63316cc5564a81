//! UI error types

use crate::switcher::FetchError;
use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error during UI operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// The file list could not be requested
    #[error("Failed to start file listing: {0}")]
    LoadError(#[from] FetchError),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
