//! Importer configuration
//!
//! All fields use `#[serde(default)]`, so a partial config (TOML or JSON)
//! merges over the defaults. `camelCase` aliases are accepted for configs
//! shared with JavaScript tooling.

use serde::{Deserialize, Serialize};

/// Default extensions probed for sub-paths, in priority order
pub const DEFAULT_EXTENSIONS: [&str; 2] = [".scss", ".sass"];

/// Default manifest fields probed for a stylesheet entry point, in priority order
pub const DEFAULT_MAIN_FIELDS: [&str; 4] = ["scss", "sass", "main.scss", "main.sass"];

/// Default legacy package prefix
pub const DEFAULT_PACKAGE_PREFIX: &str = "~";

/// Options shared by every resolution made through one importer
///
/// `O` is the option type of the underlying package resolver and is passed
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "O: Deserialize<'de> + Default"))]
pub struct ImporterOptions<O = crate::NodeResolverOptions> {
    /// Extensions tried for every sub-path candidate
    pub extensions: Vec<String>,

    /// Manifest fields tried when a package's main file is not a stylesheet
    #[serde(alias = "mainFields")]
    pub main_fields: Vec<String>,

    /// Legacy prefix stripped from the front of specifiers (empty disables)
    #[serde(alias = "packagePrefix")]
    pub package_prefix: String,

    /// Options forwarded to the package resolver
    #[serde(alias = "resolverOptions")]
    pub resolver_options: O,
}

impl<O: Default> Default for ImporterOptions<O> {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            main_fields: DEFAULT_MAIN_FIELDS.iter().map(|s| s.to_string()).collect(),
            package_prefix: DEFAULT_PACKAGE_PREFIX.to_string(),
            resolver_options: O::default(),
        }
    }
}

impl<O> ImporterOptions<O> {
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_main_fields<I, S>(mut self, main_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.main_fields = main_fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_package_prefix(mut self, package_prefix: impl Into<String>) -> Self {
        self.package_prefix = package_prefix.into();
        self
    }

    pub fn with_resolver_options(mut self, resolver_options: O) -> Self {
        self.resolver_options = resolver_options;
        self
    }
}
