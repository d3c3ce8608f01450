//! Configuration directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/goals-todos/`
//! - macOS: `~/Library/Application Support/goals-todos/`
//! - Windows: `%APPDATA%\goals-todos\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "goals-todos";

/// Get the application config directory (not created)
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get path to the global app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
