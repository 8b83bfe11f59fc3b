// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! dsrs - Operator console for the status sync and SLA engine.
//!
//! This crate provides the functionality for the `desksync` CLI tool: it
//! loads a cascade configuration, reads entity/ticket/policy snapshots as
//! JSON, and prints the plans and SLA descriptors derived by [`ds_engine`].
//! It applies nothing; the service desk owns all writes.
//!
//! # Main Components
//!
//! - [`config`] - Cascade configuration discovery and TOML persistence
//! - [`Cli`] - Command-line definitions
//! - [`Error`] - Error types for all operations
//! - [`run`] - Testable command dispatcher

mod cli;
pub mod colors;
mod commands;
mod display;
mod help;
mod schema;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, ConfigCommand, OutputFormat, SchemaCommand};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

/// Initialize logging to stderr, filtered by `RUST_LOG` (default: warn).
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let config_override = cli.config.as_deref();
    match cli.command {
        Command::Init { path } => commands::init::run(path),
        Command::Cascade {
            release,
            status,
            links,
            output,
        } => commands::cascade::run(&release, &status, &links, output, config_override),
        Command::Sla {
            ticket,
            sla,
            policies,
            now,
            output,
        } => commands::sla::run(&ticket, &sla, &policies, now.as_deref(), output),
        Command::Config(cmd) => commands::config::run(cmd, config_override),
        Command::Schema(cmd) => commands::schema::run(cmd),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "desksync", &mut std::io::stdout());
            Ok(())
        }
    }
}
