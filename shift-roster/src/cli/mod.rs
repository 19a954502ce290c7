//! Command-line interface

pub mod commands;
pub mod context;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "shift-roster", version, about = "Weekly roster spreadsheet tooling")]
pub struct Cli {
    /// Config file (defaults to <config dir>/shift-roster/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Swap two operators' shifts
    Swap(SwapArgs),
    /// Print the roster grid of a day
    Day {
        #[arg(long)]
        date: NaiveDate,
    },
    /// Show where an operator is rostered on a day
    Locate {
        #[arg(long)]
        name: String,
        #[arg(long)]
        date: NaiveDate,
    },
    /// Print the weekday ranges of the weekly tabs
    Layout,
    /// Print an operator's location, shift, vehicle and role for a day
    Roles {
        #[arg(long)]
        name: String,
        #[arg(long)]
        date: NaiveDate,
    },
    /// Append a timecard row from a JSON report
    Timecard {
        /// Report file (JSON)
        #[arg(long)]
        file: PathBuf,
        /// Build the row without appending it
        #[arg(long)]
        dry_run: bool,
    },
    /// Append a holiday license request from a JSON file
    License(LeaveArgs),
    /// Append an illness report from a JSON file
    Illness(LeaveArgs),
    /// Append an hourly permission request from a JSON file
    Permission(LeaveArgs),
}

#[derive(Debug, clap::Args)]
pub struct LeaveArgs {
    /// Request file (JSON)
    #[arg(long)]
    pub file: PathBuf,
    /// Build the row without appending it
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, clap::Args)]
pub struct SwapArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub first_date: NaiveDate,
    #[arg(long)]
    pub second_name: String,
    #[arg(long)]
    pub second_date: NaiveDate,
    /// Resolve both cells and print the writes without submitting them
    #[arg(long)]
    pub dry_run: bool,
}
