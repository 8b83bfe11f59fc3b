// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod cascade;
pub mod config;
pub mod init;
pub mod schema;
pub mod sla;

use std::io::Read;

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Read a snapshot document from a file path, or stdin when the path is "-".
pub fn read_snapshot(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Read and deserialize a JSON snapshot document.
pub fn parse_snapshot<T: DeserializeOwned>(path: &str) -> Result<T> {
    let raw = read_snapshot(path)?;
    serde_json::from_str(&raw).map_err(|e| Error::InvalidSnapshot {
        path: path.to_string(),
        message: e.to_string(),
    })
}
