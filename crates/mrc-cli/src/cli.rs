//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mr-classifier",
    version,
    about = "Classify MR series description labels",
    long_about = "Classify MR series description labels into Intent, Measurement and Features.\n\n\
                  Site-specific override rules can be supplied in a TOML config file.\n\
                  The metadata command turns a JSON header dump into a .metadata.json document."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient identifiers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify one or more labels.
    Classify(ClassifyArgs),

    /// Build a .metadata.json document from a JSON header dump.
    Metadata(MetadataArgs),

    /// List the built-in classification cascade.
    Rules,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// Labels to classify.
    #[arg(value_name = "LABEL")]
    pub labels: Vec<String>,

    /// Read additional labels from the first column of a CSV or text file.
    #[arg(long = "input", short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// TOML config with override rules.
    #[arg(long = "config", short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long = "format", value_enum, default_value = "json")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct MetadataArgs {
    /// JSON object of header field name to value.
    #[arg(value_name = "HEADER_JSON")]
    pub header: PathBuf,

    /// Output directory (default: the header's directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Instrument timezone (IANA name). Overrides the config file; UTC when unset.
    #[arg(long = "timezone", short = 'z', value_name = "TZ")]
    pub timezone: Option<String>,

    /// TOML config with override rules and timezone.
    #[arg(long = "config", short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Json,
    Table,
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
