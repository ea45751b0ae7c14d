//! CLI argument definitions for the stock reconciler.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "stockrec",
    version,
    about = "Reconcile shipment documents against a stock catalog",
    long_about = "Reconcile shipment and sales documents against a stock catalog.\n\n\
                  Extracts product codes and quantities from positioned-text JSON,\n\
                  flat text, or CSV documents and applies them as incoming,\n\
                  outgoing, or transfer stock movements."
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
    /// Book document quantities into a location.
    Incoming(IncomingArgs),

    /// Deduct document quantities from a location, clamping at zero.
    Outgoing(OutgoingArgs),

    /// Move document quantities from one location to another.
    Transfer(TransferArgs),
}

#[derive(Args)]
pub struct IncomingArgs {
    /// Location receiving the stock.
    #[arg(long = "location", value_name = "LOCATION")]
    pub location: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args)]
pub struct OutgoingArgs {
    /// Location the stock leaves from.
    #[arg(long = "location", value_name = "LOCATION")]
    pub location: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args)]
pub struct TransferArgs {
    /// Source location.
    #[arg(long = "from", value_name = "LOCATION")]
    pub from: String,

    /// Destination location.
    #[arg(long = "to", value_name = "LOCATION")]
    pub to: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Args)]
pub struct CommonArgs {
    /// Path to the catalog JSON file (mutated in place).
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: PathBuf,

    /// Emit the full summary as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Include every parsed record in the printed summary.
    #[arg(long = "show-parsed")]
    pub show_parsed: bool,

    /// Documents to reconcile (.json positioned text, .csv tabular,
    /// anything else flat text).
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
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
