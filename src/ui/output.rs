//! Output abstraction layer
//!
//! Listing mode prints matches to stdout and notes about the list to
//! stderr, so piping the output yields paths only.

use crate::switcher::QuickSwitcher;
use colored::Colorize;
use std::sync::Mutex;

/// Trait for output operations
///
/// # Examples
///
/// ```
/// use quickswitch::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("/project/src/main.rs");
/// output.info("3 more matches...");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Write a result line
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a warning message
    fn warning(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation, colored notes on stderr
pub struct StdoutWriter;

impl StdoutWriter {
    /// Create a new stdout writer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for StdoutWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputWriter for StdoutWriter {
    fn write(&self, message: &str) {
        println!("{message}");
    }

    fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    fn warning(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message.yellow());
    }

    fn info(&self, message: &str) {
        eprintln!("{}", message.dimmed());
    }
}

/// Message level for categorizing output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Result line
    Normal,
    /// Error message
    Error,
    /// Warning message
    Warning,
    /// Info message
    Info,
}

/// Writer that keeps every message in memory
///
/// ```
/// use quickswitch::ui::output::{BufferWriter, MessageLevel, OutputWriter};
///
/// let writer = BufferWriter::new();
/// writer.warning("list truncated");
/// assert_eq!(writer.messages(), [(MessageLevel::Warning, "list truncated".to_string())]);
/// ```
#[derive(Debug, Default)]
pub struct BufferWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl BufferWriter {
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages written so far, oldest first
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    /// Result lines written so far
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.messages()
            .into_iter()
            .filter(|(level, _)| *level == MessageLevel::Normal)
            .map(|(_, text)| text)
            .collect()
    }

    fn add_message(&self, level: MessageLevel, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((level, message.to_string()));
        }
    }
}

impl OutputWriter for BufferWriter {
    fn write(&self, message: &str) {
        self.add_message(MessageLevel::Normal, message);
    }

    fn error(&self, message: &str) {
        self.add_message(MessageLevel::Error, message);
    }

    fn warning(&self, message: &str) {
        self.add_message(MessageLevel::Warning, message);
    }

    fn info(&self, message: &str) {
        self.add_message(MessageLevel::Info, message);
    }
}

/// Match count line, e.g. `1 file` or `3 files (list truncated)`
#[must_use]
pub fn file_count_text(filtered_count: usize, truncated: bool) -> String {
    let plural = if filtered_count == 1 { "" } else { "s" };
    let mut text = format!("{filtered_count} file{plural}");
    if truncated {
        text.push_str(" (list truncated)");
    }
    text
}

/// Write a loaded switcher's display window to `output`
///
/// Paths go out one per line; a load failure goes out as an error and the
/// overflow and truncation notes as info. With `json` the whole snapshot is
/// written as a single JSON document instead.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be serialized.
pub fn write_listing(
    switcher: &QuickSwitcher,
    json: bool,
    output: &dyn OutputWriter,
) -> serde_json::Result<()> {
    if json {
        output.write(&serde_json::to_string_pretty(&switcher.snapshot())?);
        return Ok(());
    }

    if let Some(message) = switcher.error() {
        output.error(message);
        return Ok(());
    }

    for path in switcher.display_files() {
        output.write(path);
    }

    let overflow = switcher.overflow_count();
    if overflow > 0 {
        output.info(&format!("{overflow} more matches..."));
    }
    if switcher.truncated() || overflow > 0 {
        output.info(&file_count_text(switcher.filtered_count(), switcher.truncated()));
    }
    Ok(())
}
