//! Command-line argument definitions.

use clap::{Parser, ValueEnum};

use crate::config::{DEFAULT_LOG_FILTER, LogFormat, LoggingConfig};
use crate::output::OutputFormat;

/// How each input text is compared with the pattern.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum MatchMode {
    /// The pattern must consume the whole text.
    #[default]
    Full,
    /// The pattern must match at the start of the text.
    Prefix,
    /// The pattern may match anywhere in the text.
    Search,
}

/// Command-line interface for the motif pattern matcher.
#[derive(Parser, Debug)]
#[command(name = "motif", version, about = "Match text against motif patterns")]
pub(crate) struct Cli {
    /// `tracing` filter directive for diagnostics on stderr.
    #[arg(long, env = "MOTIF_LOG_FILTER", default_value = DEFAULT_LOG_FILTER)]
    pub(crate) log_filter: String,
    /// Diagnostic log format (`compact` or `json`).
    #[arg(long, env = "MOTIF_LOG_FORMAT", default_value_t = LogFormat::Compact)]
    pub(crate) log_format: LogFormat,
    /// How each text is compared with the pattern.
    #[arg(long, value_enum, default_value_t = MatchMode::Full)]
    pub(crate) mode: MatchMode,
    /// Makes `*` prefer the longest split instead of the shortest.
    #[arg(long)]
    pub(crate) greedy: bool,
    /// Controls how results are rendered.
    #[arg(long, value_enum, default_value_t = OutputFormat::Auto)]
    pub(crate) output: OutputFormat,
    /// Prints the compiled matcher as JSON instead of matching.
    #[arg(long)]
    pub(crate) tree: bool,
    /// The pattern to compile.
    #[arg(value_name = "PATTERN")]
    pub(crate) pattern: String,
    /// Texts to match against the pattern.
    #[arg(value_name = "TEXT", required_unless_present = "tree")]
    pub(crate) texts: Vec<String>,
}

impl Cli {
    pub(crate) fn logging(&self) -> LoggingConfig {
        LoggingConfig::new(self.log_filter.as_str(), self.log_format)
    }
}
