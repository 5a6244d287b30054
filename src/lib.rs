//! Fuzzpick - a fuzzy autocomplete widget for the terminal
//!
//! A text input fuzzy-matches what is typed against a fixed list of
//! candidates and shows a ranked, highlighted dropdown. Results are picked
//! with the keyboard or the mouse.
//!
//! The crate is split along the widget's seams:
//!
//! - [`matcher`] - the `MatchEngine` trait and a nucleo-backed engine
//! - [`widget`] - the interaction state machine and its deferred-close timer
//! - [`ui`] - the crossterm input handler and the ratatui view
//! - [`dataset`] - candidate loading
//! - [`config`], [`cli`] and [`logging`] - settings, command-line parsing
//!   and trace output

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod dataset;
pub mod logging;
pub mod matcher;
pub mod ui;
pub mod widget;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FuzzpickError {
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Candidate loading error
    #[error("Dataset error: {0}")]
    DatasetError(#[from] dataset::DatasetError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
