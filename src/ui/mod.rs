//! UI layer
//!
//! The interactive switcher is reached through the [`FileSwitcher`] trait,
//! implemented by the ratatui frontend. Non-interactive output goes through
//! [`OutputWriter`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      main (cli, config, logging)        │
//! └────────────────┬────────────────────────┘
//!         ┌────────┴─────────┐
//!         ▼                  ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ OutputWriter  │  │ FileSwitcher      │
//! │ - Stdout      │  │ - RatatuiSwitcher │
//! │ - Buffer      │  │                   │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Running the switcher
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use quickswitch::lister::ProjectFileLister;
//! use quickswitch::ui::FileSwitcher;
//! use quickswitch::ui::ratatui_adapter::RatatuiSwitcher;
//!
//! let switcher = RatatuiSwitcher::new(Arc::new(ProjectFileLister::default()));
//! if let Some(path) = switcher.run("/project", None)? {
//!     println!("{path}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod output;
pub mod ratatui_adapter;
pub mod traits;

pub use error::{Result, UiError};
pub use output::{BufferWriter, MessageLevel, OutputWriter, StdoutWriter, file_count_text, write_listing};
pub use traits::FileSwitcher;
