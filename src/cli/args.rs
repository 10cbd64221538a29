//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    calc::CalcCommands, common::ReportCommands, completions::CompletionsArgs, init::InitArgs,
    print::PrintArgs, validate::ValidateArgs,
};

#[derive(Parser)]
#[command(name = "frt")]
#[command(author, version, about = "Field Report Toolkit")]
#[command(
    long_about = "A Unix-style toolkit for managing electrical acceptance-test reports as plain text files under git version control."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Project root (default: auto-detect by finding .frt/)
    #[arg(long, global = true)]
    pub project: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new FRT project
    Init(InitArgs),

    /// Transformer report management
    #[command(subcommand)]
    Xfmr(ReportCommands),

    /// Switchgear report management
    #[command(subcommand)]
    Swgr(ReportCommands),

    /// Panelboard report management
    #[command(subcommand)]
    Pnl(ReportCommands),

    /// Motor starter report management
    #[command(subcommand)]
    Mtrs(ReportCommands),

    /// Standalone derived-value calculations
    #[command(subcommand)]
    Calc(CalcCommands),

    /// Render a report to printable Markdown
    Print(PrintArgs),

    /// Validate report files and check derived values
    Validate(ValidateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (yaml for show, tsv for list)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just IDs, one per line
    Id,
}
