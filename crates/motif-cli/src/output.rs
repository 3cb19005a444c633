//! Rendering of match results.
//!
//! Human output prints one line per text. JSON output prints one object per
//! line so results can be streamed into other tools.

use std::io::Write;

use clap::ValueEnum;
use motif::{Found, MatchOutcome};
use serde::Serialize;

use crate::errors::AppError;

/// Output format selection for match results.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Selects `human` for terminal output and `json` for redirected output.
    #[default]
    Auto,
    /// Always render human-readable output.
    Human,
    /// Always emit one JSON object per line.
    Json,
}

/// Output format after resolving `auto` based on TTY detection.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolvedOutputFormat {
    /// Human-readable lines.
    Human,
    /// JSON lines.
    Json,
}

impl OutputFormat {
    /// Resolves the output format based on whether stdout is a terminal.
    #[must_use]
    pub const fn resolve(self, stdout_is_terminal: bool) -> ResolvedOutputFormat {
        match self {
            Self::Auto => {
                if stdout_is_terminal {
                    ResolvedOutputFormat::Human
                } else {
                    ResolvedOutputFormat::Json
                }
            }
            Self::Human => ResolvedOutputFormat::Human,
            Self::Json => ResolvedOutputFormat::Json,
        }
    }
}

/// The result of matching one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct MatchReport<'a> {
    pub(crate) text: &'a str,
    pub(crate) matched: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) start: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) end: Option<usize>,
    pub(crate) captures: Vec<String>,
}

impl<'a> MatchReport<'a> {
    pub(crate) const fn missed(text: &'a str) -> Self {
        Self {
            text,
            matched: false,
            start: None,
            end: None,
            captures: Vec::new(),
        }
    }

    pub(crate) fn from_outcome(text: &'a str, start: usize, outcome: MatchOutcome) -> Self {
        let end = outcome.end();
        Self {
            text,
            matched: true,
            start: Some(start),
            end: Some(end),
            captures: outcome.into_captures(),
        }
    }

    pub(crate) fn from_found(text: &'a str, found: Found) -> Self {
        let (start, outcome) = found.into_parts();
        Self::from_outcome(text, start, outcome)
    }
}

pub(crate) fn write_report(
    out: &mut impl Write,
    format: ResolvedOutputFormat,
    report: &MatchReport<'_>,
) -> Result<(), AppError> {
    match format {
        ResolvedOutputFormat::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
        ResolvedOutputFormat::Human => writeln!(out, "{}", render_human(report))?,
    }
    Ok(())
}

pub(crate) fn render_human(report: &MatchReport<'_>) -> String {
    match (report.start, report.end) {
        (Some(start), Some(end)) if report.matched => {
            let captures: Vec<String> = report
                .captures
                .iter()
                .map(|capture| format!("{capture:?}"))
                .collect();
            format!(
                "match {:?} [{start}..{end}] {}",
                report.text,
                captures.join(" ")
            )
        }
        _ => format!("no match {:?}", report.text),
    }
}
