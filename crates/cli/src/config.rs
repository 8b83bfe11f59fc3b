// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration file management.
//!
//! The cascade configuration lives in `.desksync/config.toml`, discovered
//! by walking up from the working directory. A `--config <file>` argument
//! bypasses discovery and loads the given TOML file directly.

use std::fs;
use std::path::{Path, PathBuf};

use ds_engine::SyncConfig;

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".desksync";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Find the .desksync directory by walking up from the current directory.
pub fn find_work_dir() -> Result<PathBuf> {
    let mut current = std::env::current_dir()?;
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Loads the cascade configuration from the given `.desksync/` directory.
pub fn load(work_dir: &Path) -> Result<SyncConfig> {
    load_file(&work_dir.join(CONFIG_FILE_NAME))
}

/// Loads a cascade configuration from an explicit TOML file.
pub fn load_file(path: &Path) -> Result<SyncConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
    let config: SyncConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
    Ok(config)
}

/// Saves the cascade configuration to the given `.desksync/` directory.
pub fn save(config: &SyncConfig, work_dir: &Path) -> Result<()> {
    let config_path = work_dir.join(CONFIG_FILE_NAME);
    let content = toml::to_string_pretty(config)
        .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
    fs::write(&config_path, content)?;
    Ok(())
}

/// Initialize a new .desksync directory at the given path with the default
/// configuration.
pub fn init_work_dir(path: &Path) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;
    save(&SyncConfig::default(), &work_dir)?;

    Ok(work_dir)
}

/// Resolve the active configuration: an explicit `--config` file wins,
/// otherwise discovery. The configuration is validated before use.
pub fn resolve(config_override: Option<&Path>) -> Result<SyncConfig> {
    let config = resolve_unchecked(config_override)?;
    config.validate()?;
    Ok(config)
}

/// Like [`resolve`], but without the totality check. Used by `config show`
/// so an operator can inspect a broken configuration.
pub fn resolve_unchecked(config_override: Option<&Path>) -> Result<SyncConfig> {
    match config_override {
        Some(path) => load_file(path),
        None => load(&find_work_dir()?),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
