//! CLI argument definitions for orderwash.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "orderwash",
    version,
    about = "orderwash - Clean a raw retail transactions table",
    long_about = "Clean a raw retail transactions CSV into a canonical record set.\n\n\
                  Validates order identifiers, deduplicates on first occurrence,\n\
                  normalizes dates/names/countries, imputes missing quantities and\n\
                  prices, and writes a rejection ledger that reconciles every\n\
                  excluded row."
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
    /// Clean a transactions CSV and write the run artifacts.
    Run(RunArgs),

    /// Print the active data-quality rule tables.
    Rules(RulesArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the raw transactions CSV.
    #[arg(value_name = "INPUT_CSV")]
    pub input: PathBuf,

    /// Output directory for run artifacts (default: <input dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// TOML rules file overriding the compiled-in noise tables.
    #[arg(long = "rules", value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Run and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// TOML rules file overriding the compiled-in noise tables.
    #[arg(long = "rules", value_name = "FILE")]
    pub rules: Option<PathBuf>,
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
