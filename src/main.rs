//! Fuzzpick CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Interactive autocomplete over the built-in sample list
//! fuzzpick
//!
//! # ...over your own candidates, one per line
//! fuzzpick --candidates fruit.txt
//! ls | fuzzpick --candidates -
//!
//! # Print ranked matches without the TUI
//! fuzzpick match ap
//! fuzzpick match ap --markup
//!
//! # Write a default config file
//! fuzzpick config init
//!
//! # Trace widget transitions to a file
//! FUZZPICK_LOG=fuzzpick=trace fuzzpick --log-file fuzzpick.log
//! ```
//!
//! Each selection made in the interactive screen is printed on stdout after
//! it exits.

use fuzzpick::{
    FuzzpickError,
    cli::{Cli, Commands, ConfigCommands},
    config::FuzzpickConfig,
    dataset, logging,
    matcher::MatchEngine,
    ui::{
        OutputWriter, ResultFormat, StdoutWriter,
        output::{report_error, write_results, write_selections},
        ratatui_adapter,
    },
    widget::Autocomplete,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

type Result<T> = std::result::Result<T, FuzzpickError>;

/// Load settings and candidates for the commands that need them
fn load(cli: &Cli) -> Result<(FuzzpickConfig, Arc<[String]>)> {
    let mut config = FuzzpickConfig::load(cli.config_file.as_deref())?;
    cli.apply_overrides(&mut config);
    let candidates = dataset::load_or_sample(cli.candidates.as_deref())?;
    Ok((config, candidates))
}

/// Run the interactive widget and report its selections
fn handle_pick_command(
    config: &FuzzpickConfig,
    candidates: Arc<[String]>,
    out: &dyn OutputWriter,
) -> Result<()> {
    if candidates.is_empty() {
        return Err(FuzzpickError::InvalidInput(
            "No candidates to pick from".into(),
        ));
    }

    let widget =
        Autocomplete::new(config.engine(), candidates).with_grace_delay(config.grace_delay());
    let selections = ratatui_adapter::run(widget, config.key_release, &config.prompt)?;
    write_selections(out, &selections);
    Ok(())
}

/// Print ranked matches for one query
fn handle_match_command(
    config: &FuzzpickConfig,
    candidates: &[String],
    query: &str,
    format: &ResultFormat,
    out: &dyn OutputWriter,
) {
    let results = config.engine().search(query, candidates);
    if results.is_empty() {
        out.info(&format!("No matches for '{query}'"));
        return;
    }
    write_results(out, &results, format);
}

fn handle_config_command(
    path: Option<&Path>,
    command: &ConfigCommands,
    out: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Init => {
            let (path, written) = FuzzpickConfig::init(path)?;
            if written {
                out.success(&format!("Wrote default config to {}", path.display()));
            } else {
                out.info(&format!("Config already exists at {}", path.display()));
            }
        }
        ConfigCommands::Path => {
            let path = match path {
                Some(path) => path.to_path_buf(),
                None => FuzzpickConfig::config_path()?,
            };
            out.write(&path.display().to_string());
        }
    }
    Ok(())
}

fn run(cli: &Cli, out: &dyn OutputWriter) -> Result<()> {
    if let Some(log_file) = &cli.log_file {
        logging::init(log_file)?;
    }

    match cli.get_command() {
        Commands::Pick => {
            let (config, candidates) = load(cli)?;
            handle_pick_command(&config, candidates, out)
        }
        Commands::Match {
            query,
            markup,
            plain,
        } => {
            let (config, candidates) = load(cli)?;
            let format = if markup {
                ResultFormat::Markup(config.markers())
            } else if plain {
                ResultFormat::Plain
            } else {
                ResultFormat::Colored
            };
            handle_match_command(&config, &candidates, &query, &format, out);
            Ok(())
        }
        Commands::Config { command } => {
            handle_config_command(cli.config_file.as_deref(), &command, out)
        }
    }
}

/// Main entry point for the fuzzpick CLI
///
/// Failures are reported on stderr and exit with status 1.
fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let out = StdoutWriter::new();

    match run(&cli, &out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            report_error(&out, &e);
            ExitCode::FAILURE
        }
    }
}
