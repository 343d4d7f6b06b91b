use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Checkpoint the gate is run at. Both apply the identical check pipeline.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum Event {
    #[default]
    Upload,
    Commit,
}

#[derive(Parser, Debug)]
#[command(name = "submit-guard")]
#[command(author, version, about = "Source-change verification gate - check changed lines before upload or commit")]
#[command(long_about = "Runs an ordered pipeline of pattern, structural and external-tool checks \
    over the added and modified lines of a proposed change.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Diagnostics reported\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the presubmit checks over a change
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Read the change as a unified diff from this file ("-" for stdin)
    #[arg(long, conflicts_with = "base")]
    pub diff_file: Option<PathBuf>,

    /// Build the change by diffing the working tree against this git
    /// reference (default: HEAD)
    #[arg(long)]
    pub base: Option<String>,

    /// Checkpoint being gated; both run the same checks
    #[arg(long, value_enum, default_value = "upload")]
    pub event: Event,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Repository root the companion tools run in
    #[arg(long, default_value = ".")]
    pub repo_root: PathBuf,

    /// Output format [possible values: text, json]
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Run the checks on a worker pool instead of sequentially
    #[arg(long)]
    pub parallel: bool,

    /// Skip checks that spawn companion tools
    #[arg(long)]
    pub no_tools: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Directory to write the configuration file into
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
