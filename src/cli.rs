//! Command-line arguments and how they override the settings file

use std::path::PathBuf;

use clap::Parser;
use sift_app::config::{self, InputMode, Settings};
use sift_app::Options;
use sift_core::{Error, Result};

/// Hint printed after [`Error::NoInput`]
pub const USAGE_HINT: &str = "\
Usage:
  go test -json ./... | sift";

/// Fail with [`Error::NoInput`] when stdin is an interactive terminal
pub fn require_piped_input(stdin_is_terminal: bool) -> Result<()> {
    if stdin_is_terminal {
        return Err(Error::NoInput);
    }
    Ok(())
}

/// sift - Interactive terminal console for go test -json output
#[derive(Parser, Debug, Default)]
#[command(name = "sift", version)]
#[command(about = "Interactive terminal console for go test -json output", long_about = None)]
pub struct Args {
    /// Show verbose logs and the cursor/scroll overlay
    #[arg(short, long)]
    pub debug: bool,

    /// Show log lines as written instead of parsing them
    #[arg(short, long)]
    pub raw: bool,

    /// Print the results once at the end instead of the interactive view
    #[arg(short = 'n', long)]
    pub non_interactive: bool,

    /// Stop at the first line that is not a test event
    #[arg(long)]
    pub strict: bool,

    /// Expand the test under the cursor and collapse the one it leaves
    #[arg(short, long)]
    pub auto_toggle: bool,

    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Settings from `--config`, `$SIFT_CONFIG` or the default location
    pub fn settings(&self) -> Settings {
        match &self.config {
            Some(path) => config::load_settings_from(path),
            None => config::load_settings(),
        }
    }

    /// Resolve options from `settings`, with flags taking precedence.
    ///
    /// `stdout_is_terminal` forces the inline mode when false and
    /// `color` is the final colour decision (settings plus `NO_COLOR`).
    pub fn options(&self, settings: &Settings, stdout_is_terminal: bool, color: bool) -> Options {
        let mut options = Options::from_settings(settings);
        options.interactive = !self.non_interactive && stdout_is_terminal;
        options.debug = self.debug;
        options.color = color;
        if self.raw {
            options.pretty = false;
        }
        if self.strict {
            options.input_mode = InputMode::Strict;
        }
        if self.auto_toggle {
            options.auto_toggle = true;
        }
        options
    }
}
