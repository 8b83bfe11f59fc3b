// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use ds_engine::{propagate, LinkedEntity, ReleaseStatus};

use crate::cli::OutputFormat;
use crate::config;
use crate::display;
use crate::error::Result;

pub fn run(
    release: &str,
    status: &str,
    links: &str,
    output: OutputFormat,
    config_override: Option<&Path>,
) -> Result<()> {
    let config = config::resolve(config_override)?;
    let new_status: ReleaseStatus = status.parse()?;
    let linked: Vec<LinkedEntity> = super::parse_snapshot(links)?;
    tracing::debug!(
        "planning cascade for release {} over {} linked entities",
        release,
        linked.len()
    );

    let outcome = propagate(release, new_status, &linked, &config)?;
    if !config.enable_cascading_updates {
        tracing::info!("cascading updates disabled; plan is empty");
    }

    match output {
        OutputFormat::Text => print!("{}", display::format_outcome(&outcome)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }
    Ok(())
}

#[cfg(test)]
#[path = "cascade_tests.rs"]
mod tests;
