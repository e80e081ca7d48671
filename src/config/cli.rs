//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// MicroSIP bridge
///
/// Merges MicroSIP configuration fragments and exports Nextcloud
/// address books into the MicroSIP contact list.
#[derive(Debug, Parser)]
#[command(name = "microsip-bridge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to settings file (default: first settings.toml found in the lookup paths)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// HTTP timeout per address book request, in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for microsip-bridge
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default settings file
    Init {
        /// Output path for the settings file
        #[arg(long, short, default_value = "settings.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
