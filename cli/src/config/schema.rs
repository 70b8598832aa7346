//! Configuration schema for sass-importer
//!
//! ```toml
//! [importer]
//! extensions = [".scss", ".sass"]
//! main_fields = ["sass", "scss"]
//! package_prefix = "~"
//!
//! [importer.resolver_options]
//! basedir = "/srv/app"
//! paths = ["vendor"]
//! ```

use sass_importer::ImporterOptions;
use serde::{Deserialize, Serialize};

/// Main configuration structure
///
/// Every field uses #[serde(default)], so a partial config merges over the
/// built-in importer defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SassImporterConfig {
    /// Options for every importer built by the CLI
    #[serde(default)]
    pub importer: ImporterOptions,
}

impl SassImporterConfig {
    /// Validate the configuration for common errors
    ///
    /// Returns Ok(()) if valid, or Err with a list of error messages
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let resolver = &self.importer.resolver_options;
        for ext in self.importer.extensions.iter().chain(&resolver.extensions) {
            if !ext.starts_with('.') || ext.len() < 2 {
                errors.push(format!(
                    "Extension '{}' must start with '.' and name a suffix (e.g. \".scss\")",
                    ext
                ));
            }
        }

        for field in &self.importer.main_fields {
            if field.trim().is_empty() {
                errors.push("Manifest field names cannot be empty".to_string());
            }
        }

        for dir in &resolver.module_directories {
            if dir.is_empty() || dir.contains('/') {
                errors.push(format!(
                    "Module directory '{}' must be a single directory name",
                    dir
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
