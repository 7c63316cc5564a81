//! Quickswitch - jump to any file in a project by typing part of its path
//!
//! This library provides the file quick-switcher engine: it lists a
//! project's files in the background, narrows them with a case-insensitive
//! substring query, keeps a capped display window with a selection cursor
//! and resolves Enter to the absolute path of the chosen file.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod lister;
pub mod paths;
pub mod switcher;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum QuickSwitchError {
    /// File listing error
    #[error("Listing error: {0}")]
    FetchError(#[from] switcher::FetchError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Logger could not be installed
    #[error("Logging error: {0}")]
    LoggerError(#[from] log::SetLoggerError),
    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
