//! Quickswitch CLI application entry point
//!
//! Opens a file quick-switcher over a project directory. Type to narrow the
//! file list, move with the arrow keys, press Enter to pick a file and
//! Escape to leave.
//!
//! # Usage
//!
//! ```bash
//! # Pick a file in the current directory and print its absolute path
//! quickswitch
//!
//! # Start with a query and open the choice with the default application
//! quickswitch ~/code/project -q main --open
//!
//! # Non-interactive: print the matching files
//! quickswitch ~/code/project --list -q readme
//! quickswitch ~/code/project --list --json
//!
//! # Debug logging while the TUI owns the terminal
//! quickswitch -vv --log-file /tmp/quickswitch.log
//! ```
//!
//! # Configuration
//!
//! Settings live in the user's config directory
//! (`~/.config/quickswitch/config.toml` on Linux) and are created with
//! defaults on first run.

use log::LevelFilter;
use quickswitch::{
    QuickSwitchError,
    cli::Cli,
    config::SwitcherConfig,
    switcher::{FileLister, QuickSwitcher},
    ui::{FileSwitcher, OutputWriter, StdoutWriter, ratatui_adapter::RatatuiSwitcher, write_listing},
};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode, WriteLogger};
use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

type Result<T> = std::result::Result<T, QuickSwitchError>;

/// Install the logger for this run
///
/// The TUI owns the terminal, so it only logs when `--log-file` is given.
/// Listing mode logs to stderr unless a file was requested.
fn init_logging(cli: &Cli, config: &SwitcherConfig) -> Result<()> {
    let level = cli.level_filter(config.level_filter());
    let log_config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Error)
        .set_thread_level(LevelFilter::Debug)
        .build();

    if let Some(path) = &cli.log_file {
        WriteLogger::init(level, log_config, File::create(path)?)?;
    } else if cli.list {
        TermLogger::init(level, log_config, TerminalMode::Stderr, ColorChoice::Auto)?;
    }
    Ok(())
}

/// Load once, synchronously, and print the display window
fn handle_list(cli: &Cli, lister: &dyn FileLister, output: &dyn OutputWriter) -> Result<ExitCode> {
    let mut switcher = QuickSwitcher::new(cli.root_string());
    if let Some(query) = &cli.query {
        switcher.set_query(query.as_str());
    }

    let ticket = switcher.mount();
    let outcome = lister.list_project_files(ticket.root());
    switcher.apply_load(&ticket, outcome);

    write_listing(&switcher, cli.json, output)?;

    if switcher.error().is_some() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Run the interactive switcher and act on the chosen file
fn handle_interactive(cli: &Cli, lister: Arc<dyn FileLister>, output: &dyn OutputWriter) -> Result<ExitCode> {
    let frontend = RatatuiSwitcher::new(lister);
    let root = cli.root_string();

    let Some(path) = frontend.run(&root, cli.query.as_deref())? else {
        log::info!("switcher dismissed");
        return Ok(ExitCode::FAILURE);
    };

    log::info!("selected {path}");
    if cli.open {
        open::that(&path)?;
    } else {
        output.write(&path);
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse_args();
    let config = SwitcherConfig::load()?;

    init_logging(&cli, &config)?;

    let output = StdoutWriter::new();
    let lister = Arc::new(config.lister());

    if cli.list {
        handle_list(&cli, lister.as_ref(), &output)
    } else {
        handle_interactive(&cli, lister, &output)
    }
}
