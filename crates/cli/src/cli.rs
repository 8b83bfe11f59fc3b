// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::colors;
use crate::help;

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "desksync")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Plan status cascades and inspect SLA budgets for the service desk")]
#[command(
    long_about = "Plan status cascades and inspect SLA budgets for the service desk.\n\n\
    Reads entity and ticket snapshots as JSON and prints the update intents\n\
    and SLA descriptors the sync engine derives from them. Nothing is written\n\
    back; applying a plan is the service desk's job."
)]
#[command(styles = help::styles())]
pub struct Cli {
    /// Use an explicit config file instead of discovering .desksync/
    #[arg(long, global = true, value_name = "file")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a .desksync/config.toml with the default configuration
    Init {
        /// Directory to initialize (defaults to the current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Plan the cascade for a release status change
    #[command(after_help = colors::examples("\
Examples:
  desksync cascade -r R1 -s deployed -l links.json    Plan from a snapshot file
  cat links.json | desksync cascade -r R1 -s deployed -l -    Read the snapshot from stdin
  desksync cascade -r R1 -s cancelled -l links.json -o json   Machine-readable plan"))]
    Cascade {
        /// The release whose status changed
        #[arg(long, short)]
        release: String,

        /// The release's new status (planned, in_progress, deployed, cancelled)
        #[arg(long, short)]
        status: String,

        /// JSON file with the linked entity snapshot ('-' for stdin)
        #[arg(long, short)]
        links: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Evaluate a ticket against an SLA budget
    #[command(after_help = colors::examples("\
Examples:
  desksync sla -t ticket.json -s response -p policies.json    Response budget, current time
  desksync sla -t ticket.json -s resolution -p policies.json --now 2026-03-01T14:00:00Z    Evaluate at a fixed instant
  desksync sla -t - -s resolution -p policies.json -o json    Ticket from stdin, JSON out"))]
    Sla {
        /// JSON file with the ticket snapshot ('-' for stdin)
        #[arg(long, short)]
        ticket: String,

        /// Which budget to measure (response, resolution)
        #[arg(long, short)]
        sla: String,

        /// JSON file with the SLA policy set
        #[arg(long, short)]
        policies: String,

        /// Evaluate at this RFC 3339 instant instead of the system clock
        #[arg(long)]
        now: Option<String>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show or validate the cascade configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Print JSON Schemas for the input documents
    #[command(subcommand)]
    Schema(SchemaCommand),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the active configuration
    Show {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },
    /// Check that the mapping tables cover every release status
    Validate,
}

#[derive(Subcommand)]
pub enum SchemaCommand {
    /// Schema of the config.toml document
    Config,
    /// Schema of the linked-entity snapshot consumed by 'cascade'
    Links,
    /// Schema of the policy set consumed by 'sla'
    Policies,
    /// Schema of the ticket snapshot consumed by 'sla'
    Ticket,
}
