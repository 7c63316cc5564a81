//! Frontend trait for interactive switching

use super::error::Result;

/// Trait for interactive switcher frontends
///
/// A frontend lists the files under a root, lets the user narrow them down
/// and reports the chosen file.
pub trait FileSwitcher {
    /// Run the switcher over `root`, starting with `query` if given
    ///
    /// Returns the absolute path of the chosen file, or `None` when the
    /// user dismissed the switcher.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontend cannot be initialized or fails
    /// while running.
    fn run(&self, root: &str, query: Option<&str>) -> Result<Option<String>>;
}
