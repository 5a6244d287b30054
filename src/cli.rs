//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **pick**: interactive autocomplete (default)
//! - **match**: print ranked, highlighted matches for one query
//! - **config**: manage the config file
//!
//! Options are global, so `fuzzpick match ap --candidates fruit.txt` and
//! `fuzzpick --candidates fruit.txt match ap` parse the same way.
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use fuzzpick::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["fuzzpick", "match", "ap", "--markup"]);
//! assert!(matches!(cli.get_command(), Commands::Match { markup: true, .. }));
//! ```

use crate::config::FuzzpickConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "fuzzpick")]
#[command(about = "Fuzzy autocomplete over a fixed list of candidates", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Candidate file, one per line ("-" reads stdin; default: built-in sample)
    #[arg(short = 'c', long = "candidates", value_name = "FILE", global = true)]
    pub candidates: Option<PathBuf>,

    /// Config file (default: the user config directory)
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,

    /// Grace period in milliseconds before closing when focus leaves over the list
    #[arg(long = "delay-ms", value_name = "MS", global = true)]
    pub delay_ms: Option<u64>,

    /// Maximum number of results (0 for all)
    #[arg(short = 'l', long = "limit", value_name = "N", global = true)]
    pub limit: Option<usize>,

    /// Write trace output to this file (filter with FUZZPICK_LOG)
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive autocomplete (default)
    #[command(visible_alias = "p")]
    Pick,

    /// Print ranked matches for a query
    #[command(visible_alias = "m")]
    Match {
        /// Query to match
        #[arg(value_name = "QUERY")]
        query: String,

        /// Wrap matched spans in markup markers instead of terminal colors
        #[arg(long = "markup", conflicts_with = "plain")]
        markup: bool,

        /// Print candidates without highlighting
        #[arg(long = "plain")]
        plain: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Write a default config file if none exists
    Init,

    /// Print the config file location
    Path,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Pick if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Pick)
    }

    /// Apply flags that override config values
    pub fn apply_overrides(&self, config: &mut FuzzpickConfig) {
        if let Some(delay) = self.delay_ms {
            config.grace_delay_ms = delay;
        }
        if let Some(limit) = self.limit {
            config.max_results = limit;
        }
    }
}
