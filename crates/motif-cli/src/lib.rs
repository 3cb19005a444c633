//! Command-line runtime for the motif pattern matcher.
//!
//! The runtime owns argument parsing, logging bootstrap, pattern compilation
//! and result rendering. It writes through caller-supplied streams so tests
//! can drive it without spawning a process.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use motif::{ParseOptions, Pattern, Repetition};
use tracing::{debug, info};

mod cli;
mod config;
mod errors;
mod output;
pub mod telemetry;

pub use cli::MatchMode;
pub use config::{DEFAULT_LOG_FILTER, LogFormat, LogFormatParseError, LoggingConfig};
pub use output::{OutputFormat, ResolvedOutputFormat};

use cli::Cli;
use errors::AppError;
use output::{MatchReport, write_report};

const CLI_TARGET: &str = "motif::cli";

/// Runs the CLI using the provided arguments and IO handles.
///
/// Returns success when every text matched. Usage errors, malformed
/// patterns and IO failures are written to `stderr` and yield failure.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E, stdout_is_terminal: bool) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let result = Cli::try_parse_from(args)
        .map_err(AppError::CliUsage)
        .and_then(|cli| execute(&cli, stdout, stdout_is_terminal));

    match result {
        Ok(exit_code) => exit_code,
        Err(AppError::CliUsage(error)) if !error.use_stderr() => {
            // `--help` and `--version` are successful requests.
            let _ = write!(stdout, "{error}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            let _ = writeln!(stderr, "{error}");
            ExitCode::FAILURE
        }
    }
}

fn execute<W: Write>(
    cli: &Cli,
    stdout: &mut W,
    stdout_is_terminal: bool,
) -> Result<ExitCode, AppError> {
    telemetry::initialise(&cli.logging())?;

    let repetition = if cli.greedy {
        Repetition::Greedy
    } else {
        Repetition::Lazy
    };
    let options = ParseOptions::new().with_wildcard(repetition);
    let pattern = Pattern::compile_with(&cli.pattern, &options)?;

    if cli.tree {
        serde_json::to_writer_pretty(&mut *stdout, pattern.matcher())?;
        writeln!(stdout)?;
        return Ok(ExitCode::SUCCESS);
    }

    let format = cli.output.resolve(stdout_is_terminal);
    debug!(
        target: CLI_TARGET,
        mode = ?cli.mode,
        format = ?format,
        texts = cli.texts.len(),
        "matching texts"
    );

    let mut all_matched = true;
    for text in &cli.texts {
        let report = evaluate(&pattern, cli.mode, text);
        all_matched &= report.matched;
        write_report(stdout, format, &report)?;
    }

    info!(target: CLI_TARGET, all_matched, "match run complete");
    Ok(if all_matched {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn evaluate<'a>(pattern: &Pattern, mode: MatchMode, text: &'a str) -> MatchReport<'a> {
    match mode {
        MatchMode::Full => pattern
            .first_match(text)
            .filter(|outcome| outcome.reaches_end(text))
            .map_or_else(
                || MatchReport::missed(text),
                |outcome| MatchReport::from_outcome(text, 0, outcome),
            ),
        MatchMode::Prefix => pattern.first_match(text).map_or_else(
            || MatchReport::missed(text),
            |outcome| MatchReport::from_outcome(text, 0, outcome),
        ),
        MatchMode::Search => pattern.find(text).map_or_else(
            || MatchReport::missed(text),
            |found| MatchReport::from_found(text, found),
        ),
    }
}

#[cfg(test)]
mod tests;
