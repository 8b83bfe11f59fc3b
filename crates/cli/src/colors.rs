// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and report output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use ds_engine::SlaStatus;

/// ANSI 256-color codes shared across help and report output.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;
    /// SLA ok: green
    pub const OK: u8 = 70;
    /// SLA warning: amber
    pub const WARNING: u8 = 178;
    /// SLA breached: red
    pub const BREACHED: u8 = 160;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    // NO_COLOR=1 disables colors
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }

    // COLOR=1 forces colors even without TTY
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }

    // Default: enable colors only if stdout is a TTY
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (default values, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Colorize an SLA status by health: green/amber/red.
///
/// Returns the plain string when colors are disabled.
pub fn sla_status(status: SlaStatus) -> String {
    if !should_colorize() {
        return status.to_string();
    }
    let code = match status {
        SlaStatus::Ok => codes::OK,
        SlaStatus::Warning => codes::WARNING,
        SlaStatus::Breached => codes::BREACHED,
    };
    paint(code, status.as_str())
}

/// Colorize an examples help block.
///
/// Expects format like:
/// ```text
/// Examples:
///   desksync command args    Description here
/// ```
///
/// Section headers (lines ending with `:`) get the header color; the
/// command part of an example line (before a two-space gap) gets the
/// literal color and the description the context color.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + 256);

    for line in text.lines() {
        if !result.is_empty() {
            result.push('\n');
        }

        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            result.push_str(indent);
            result.push_str(&header(trimmed));
            continue;
        }

        if let Some(gap) = trimmed.find("  ") {
            let (cmd, desc) = trimmed.split_at(gap);
            result.push_str(indent);
            result.push_str(&literal(cmd));
            result.push_str(&context(desc));
            continue;
        }

        result.push_str(line);
    }

    result
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
