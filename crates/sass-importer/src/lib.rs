//! Package-style importer for stylesheet compilers
//!
//! Resolves `@use`/`@import`/`@forward` URLs such as `bootstrap`,
//! `~bootstrap/scss/grid` or `@scope/pkg/sub/widget` into stylesheet files
//! inside installed packages:
//!
//! - [`specifier`] splits a URL into a package id and an optional sub-path
//! - [`entry`] finds a package's stylesheet entry point (main file or manifest fields)
//! - [`subpath`] probes partial, index and extension variants of a sub-path
//! - [`importer`] exposes the callback and file-URL importer boundaries
//! - [`resolver`] defines the package resolution service and a Node-style implementation
//!
//! ```no_run
//! use sass_importer::{Importer, ImporterOptions, NodeResolver};
//!
//! # async fn example() {
//! let importer = Importer::new(NodeResolver::new(), ImporterOptions::default());
//! if let Some(url) = importer.file_importer().find_file_url("bootstrap", &Default::default()).await {
//!     println!("{url}");
//! }
//! # }
//! ```

pub mod entry;
pub mod error;
pub mod importer;
pub mod manifest;
pub mod options;
pub mod resolution;
pub mod resolver;
pub mod specifier;
pub mod stylesheet;
pub mod subpath;

#[cfg(test)]
mod test_support;

pub use error::ResolveError;
pub use importer::{CanonicalizeContext, FileImporter, Importer, LegacyImportResult};
pub use manifest::PackageManifest;
pub use options::ImporterOptions;
pub use resolution::Resolution;
pub use resolver::{NodeResolver, NodeResolverOptions, PackageResolver, ResolvedPackage};
pub use specifier::{parse, ParsedSpecifier};
pub use stylesheet::is_stylesheet_file;
