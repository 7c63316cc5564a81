//! Command-line interface definitions and parsing
//!
//! # Modes
//!
//! - **interactive** (default): terminal switcher; prints or opens the chosen file
//! - **list** (`--list`): loads once, applies `--query`, prints the display window
//!
//! # Examples
//!
//! ```no_run
//! use quickswitch::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("switching in {}", cli.root_string());
//! ```

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "quickswitch")]
#[command(about = "Quickly switch to a file in a project", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Project root to list (defaults to the current directory)
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Initial query
    #[arg(short = 'q', long = "query", value_name = "QUERY")]
    pub query: Option<String>,

    /// Print matches instead of opening the interactive switcher
    #[arg(long = "list")]
    pub list: bool,

    /// With --list, print the switcher state as JSON
    #[arg(long = "json", requires = "list")]
    pub json: bool,

    /// Open the selected file with the default application
    #[arg(long = "open", conflicts_with = "list")]
    pub open: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Project root as the string handed to the switcher
    ///
    /// The root is passed through verbatim; a bad root surfaces as a load error.
    #[must_use]
    pub fn root_string(&self) -> String {
        match &self.root {
            Some(root) => root.to_string_lossy().into_owned(),
            None => std::env::current_dir()
                .map(|dir| dir.to_string_lossy().into_owned())
                .unwrap_or_else(|_| ".".to_string()),
        }
    }

    /// Log level from `-v` flags, or `fallback` when none were given
    #[must_use]
    pub const fn level_filter(&self, fallback: LevelFilter) -> LevelFilter {
        match self.verbose {
            0 => fallback,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
