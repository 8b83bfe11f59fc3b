// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::cli::{ConfigCommand, OutputFormat};
use crate::config;
use crate::display;
use crate::error::Result;

/// Execute a config subcommand.
pub fn run(cmd: ConfigCommand, config_override: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Show { output } => show(output, config_override),
        ConfigCommand::Validate => validate(config_override),
    }
}

/// Print the active configuration. Shown even when the mapping tables have
/// gaps, so an operator can see what needs fixing.
fn show(output: OutputFormat, config_override: Option<&Path>) -> Result<()> {
    let config = config::resolve_unchecked(config_override)?;

    match output {
        OutputFormat::Text => print!("{}", display::format_config(&config)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
    }
    Ok(())
}

/// Totality-check the mapping tables.
fn validate(config_override: Option<&Path>) -> Result<()> {
    let config = config::resolve_unchecked(config_override)?;
    config.validate()?;
    println!("configuration ok");
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
