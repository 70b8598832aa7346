pub mod candidates;
pub mod resolve;

use crate::config::SassImporterConfig;
use sass_importer::ImporterOptions;
use std::path::PathBuf;

/// Importer flags shared by the resolving commands
///
/// Flags that are given replace the corresponding config value.
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    pub extensions: Vec<String>,
    pub main_fields: Vec<String>,
    pub package_prefix: Option<String>,
    pub basedir: Option<PathBuf>,
}

impl OptionOverrides {
    /// Merge these overrides over the options from `config`
    pub fn apply(self, config: SassImporterConfig) -> ImporterOptions {
        let mut options = config.importer;
        if !self.extensions.is_empty() {
            options.extensions = self.extensions;
        }
        if !self.main_fields.is_empty() {
            options.main_fields = self.main_fields;
        }
        if let Some(prefix) = self.package_prefix {
            options.package_prefix = prefix;
        }
        if let Some(basedir) = self.basedir {
            options.resolver_options.basedir = Some(basedir);
        }
        options
    }
}
