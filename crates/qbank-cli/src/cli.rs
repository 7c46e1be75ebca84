//! CLI argument definitions for the question bank toolkit.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use qbank_match::DEFAULT_MATCH_THRESHOLD;

#[derive(Parser)]
#[command(
    name = "qbank",
    version,
    about = "Question Bank Import Toolkit - Review bulk question imports",
    long_about = "Review batches of question-bank files before bulk import.\n\n\
                  Parses exam metadata out of filenames, clusters files by course,\n\
                  and suggests catalog courses via fuzzy matching."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Scan a folder of question files and print the import plan.
    Scan(ScanArgs),

    /// Parse filenames and print the extracted metadata.
    Parse(ParseArgs),
}

#[derive(Parser)]
pub struct ScanArgs {
    /// Path to the folder containing question JSON files.
    #[arg(value_name = "IMPORT_FOLDER")]
    pub import_folder: PathBuf,

    /// Course catalog JSON file (array of {"id", "name"}) to match against.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Score a catalog match must strictly exceed to be suggested.
    #[arg(long = "threshold", default_value_t = DEFAULT_MATCH_THRESHOLD)]
    pub threshold: f64,

    /// Emit machine-readable JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ParseArgs {
    /// Filenames to parse.
    #[arg(value_name = "FILENAME", required = true)]
    pub filenames: Vec<String>,

    /// Emit machine-readable JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
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
