// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for the input documents.

use schemars::schema_for;

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::{ConfigDoc, LinksDoc, PoliciesDoc, TicketDoc};

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    let schema = match cmd {
        SchemaCommand::Config => schema_for!(ConfigDoc),
        SchemaCommand::Links => schema_for!(LinksDoc),
        SchemaCommand::Policies => schema_for!(PoliciesDoc),
        SchemaCommand::Ticket => schema_for!(TicketDoc),
    };

    let json = serde_json::to_string_pretty(&schema)?;
    println!("{}", json);
    Ok(())
}
