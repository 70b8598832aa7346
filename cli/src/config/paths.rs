//! Directory path management for sass-importer
//!
//! All paths used by the CLI are centralized here.

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the base sass-importer directory (~/.config/sass-importer/)
pub fn get_config_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Failed to get config directory")?
        .join("sass-importer"))
}

/// Get the config file path (~/.config/sass-importer/config.toml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.toml"))
}
