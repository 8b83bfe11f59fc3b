// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the dsrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'desksync init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("{0}")]
    Config(String),

    #[error("invalid snapshot in {path}: {message}")]
    InvalidSnapshot { path: String, message: String },

    #[error("invalid --now value: '{0}'\n  hint: use an RFC 3339 timestamp like 2026-03-01T09:00:00Z")]
    InvalidNow(String),

    #[error(transparent)]
    Engine(#[from] ds_engine::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for dsrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
