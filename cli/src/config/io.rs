//! Configuration file I/O operations
//!
//! All loads include automatic validation.

use super::paths::get_config_path;
use super::schema::SassImporterConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load configuration from the default location
///
/// Returns a default config if the file doesn't exist.
pub fn load_config() -> Result<SassImporterConfig> {
    let path = get_config_path()?;

    if !path.exists() {
        return Ok(SassImporterConfig::default());
    }

    load_config_from(&path)
}

/// Load configuration from an explicit path
///
/// Unlike [`load_config`], a missing file is an error.
pub fn load_config_from(path: &Path) -> Result<SassImporterConfig> {
    let content =
        fs::read_to_string(path).context(format!("Failed to read config: {}", path.display()))?;

    let config: SassImporterConfig =
        toml::from_str(&content).context(format!("Failed to parse config: {}", path.display()))?;

    if let Err(errors) = config.validate() {
        anyhow::bail!(
            "Config validation failed in {}:\n  {}",
            path.display(),
            errors.join("\n  ")
        );
    }

    Ok(config)
}

/// Load from `path` when given, otherwise from the default location
pub fn load(path: Option<&Path>) -> Result<SassImporterConfig> {
    match path {
        Some(path) => load_config_from(path),
        None => load_config(),
    }
}

/// Render a config as TOML
pub fn to_toml(config: &SassImporterConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config")
}
