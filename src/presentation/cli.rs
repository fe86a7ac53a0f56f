//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--json, --color, --verbose, --config, --no-seed) are
//! inherited by all subcommands. Without a subcommand the binary opens the
//! interactive session.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::domain::services::{FilterCriteria, ReportKind};
use crate::domain::value_objects::{CalendarZone, Status};
use crate::error::{PaintshopError, PaintshopResult};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Paintshop - work orders and service catalog for a finishing workshop
#[derive(Parser, Debug)]
#[command(name = "paintshop")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'paintshop' without arguments for the interactive console.")]
pub struct Cli {
    /// Machine-readable JSON output
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./paintshop.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start with an empty catalog instead of the demo data
    #[arg(long, global = true)]
    pub no_seed: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the service catalog
    Services,

    /// List work orders, newest first
    Orders {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Show one work order or service by id
    Show {
        /// Work order or service id (e.g. wo-1, 2)
        id: String,
    },

    /// Print an analytics report
    Report {
        #[arg(value_enum)]
        kind: ReportKind,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Export a report as CSV
    Export {
        #[arg(value_enum)]
        kind: ReportKind,

        /// Directory to write to (overrides [export] directory)
        #[arg(short, long, value_name = "DIR", conflicts_with = "stdout")]
        output: Option<PathBuf>,

        /// Write the CSV to stdout instead of a file
        #[arg(long)]
        stdout: bool,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Run a scripted work-order lifecycle against the session store
    Demo,
}

/// Work-order list filters
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Client name contains (case-insensitive)
    #[arg(long, value_name = "TEXT")]
    pub client: Option<String>,

    /// Paint color contains (case-insensitive)
    #[arg(long = "paint-color", value_name = "TEXT")]
    pub paint_color: Option<String>,

    /// Exact status
    #[arg(long, value_enum)]
    pub status: Option<Status>,

    /// Created on or after (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    /// Created on or before (YYYY-MM-DD)
    #[arg(long, value_name = "DATE", value_parser = parse_date)]
    pub to: Option<NaiveDate>,
}

impl FilterArgs {
    /// Convert flags into list filter criteria
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            client_name: self.client.clone(),
            paint_color: self.paint_color.clone(),
            status: self.status,
            created_from: self.from,
            created_to: self.to,
            zone: CalendarZone::Local,
        }
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> PaintshopResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| PaintshopError::InvalidDate {
        value: value.to_string(),
    })
}
