//! Output abstraction layer
//!
//! Line-oriented output for the non-interactive commands and for reporting
//! selections after the interactive widget exits.

use crate::matcher::{HighlightMarkers, MatchResult, render_highlight};
use crate::widget::Selection;
use colored::Colorize;

/// Trait for output operations
///
/// # Examples
///
/// ```no_run
/// use fuzzpick::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("Normal message");
/// output.success("Operation completed!");
/// output.error("Something went wrong");
/// ```
pub trait OutputWriter {
    /// Write a normal message
    fn write(&self, message: &str);

    /// Write an error message
    fn error(&self, message: &str);

    /// Write a success message
    fn success(&self, message: &str);

    /// Write an info message (dimmed/secondary)
    fn info(&self, message: &str);
}

/// CLI implementation - writes to stdout/stderr
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

    fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    fn info(&self, message: &str) {
        eprintln!("{}", message.dimmed());
    }
}

/// How match results are formatted as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultFormat {
    /// Matched spans in bold yellow (ANSI)
    Colored,
    /// Matched spans wrapped in markup markers
    Markup(HighlightMarkers),
    /// Candidate text only
    Plain,
}

/// Format one result as a line of text
#[must_use]
pub fn format_result(result: &MatchResult, format: &ResultFormat) -> String {
    match format {
        ResultFormat::Colored => result
            .segments()
            .into_iter()
            .map(|(text, matched)| {
                if matched {
                    text.yellow().bold().to_string()
                } else {
                    text
                }
            })
            .collect(),
        ResultFormat::Markup(markers) => render_highlight(result, markers),
        ResultFormat::Plain => result.candidate.clone(),
    }
}

/// Write ranked results, one per line
pub fn write_results(out: &dyn OutputWriter, results: &[MatchResult], format: &ResultFormat) {
    for result in results {
        out.write(&format_result(result, format));
    }
}

/// Report a failed command on the error stream
pub fn report_error(out: &dyn OutputWriter, error: &dyn std::error::Error) {
    out.error(&error.to_string());
}

/// Write the candidates of fired selections, one per line
pub fn write_selections(out: &dyn OutputWriter, selections: &[Selection]) {
    for selection in selections {
        out.write(&selection.candidate);
    }
}
