//! CLI argument definitions for amico.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

use amico_cli::commands::{CompareConfig, DEFAULT_FIRST_PATTERN, DEFAULT_SECOND_PATTERN};

#[derive(Parser)]
#[command(
    name = "amico",
    version,
    about = "Compare dataset metadata between two catalog search patterns",
    long_about = "Query a dataset catalog for two search patterns and list the dataset pairs\n\
                  whose short physics descriptions share enough tokens.\n\n\
                  Patterns use catalog wildcard syntax: % matches any run of characters,\n\
                  _ matches a single character."
)]
pub struct Cli {
    /// Catalog search pattern for the first collection.
    #[arg(long = "pattern1", value_name = "PATTERN", default_value = DEFAULT_FIRST_PATTERN)]
    pub pattern1: String,

    /// Catalog search pattern for the second collection.
    #[arg(long = "pattern2", value_name = "PATTERN", default_value = DEFAULT_SECOND_PATTERN)]
    pub pattern2: String,

    /// Percentage a pair must exceed to be reported as a match.
    #[arg(long = "percentage", value_name = "NUMBER", default_value_t = 40.0)]
    pub percentage: f64,

    /// Maximum number of catalog results per pattern.
    #[arg(
        long = "maxresults",
        value_name = "NUMBER",
        default_value_t = 10,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_results: u32,

    /// User name recorded in the log (defaults to $USER).
    #[arg(short = 'u', long = "username", value_name = "USERNAME")]
    pub username: Option<String>,

    /// Catalog export to query (falls back to $AMICO_CATALOG).
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Dataset type to restrict both queries to.
    #[arg(long = "dataset-type", value_name = "TYPE", default_value = "AOD")]
    pub dataset_type: String,

    /// Query every dataset type.
    #[arg(long = "any-type", conflicts_with = "dataset_type")]
    pub any_type: bool,

    /// Token delimiter inside short physics descriptions.
    #[arg(long = "delimiter", value_name = "DELIM", default_value = "_")]
    pub delimiter: String,

    /// Do not print the start-up banner.
    #[arg(long = "no-logo")]
    pub no_logo: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn compare_config(&self) -> CompareConfig {
        CompareConfig {
            first_pattern: self.pattern1.clone(),
            second_pattern: self.pattern2.clone(),
            threshold: self.percentage,
            max_results: self.max_results as usize,
            dataset_type: (!self.any_type).then(|| self.dataset_type.clone()),
            delimiter: self.delimiter.clone(),
            catalog: self.catalog.clone(),
            username: self
                .username
                .clone()
                .or_else(|| std::env::var("USER").ok()),
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
