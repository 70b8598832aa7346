//! Importer boundaries
//!
//! [`Importer::resolve`] is the single resolution core. Two thin adapters
//! present its result the way stylesheet compilers expect it:
//!
//! - [`Importer::import`]: legacy callback importer, `done` is called exactly
//!   once with `Some({ file })` or `None`
//! - [`FileImporter::find_file_url`]: file importer, resolves to a `file://`
//!   URL or `None`
//!
//! Both boundaries report resolver errors the same way as "not found".

mod file;
mod legacy;

pub use file::{CanonicalizeContext, FileImporter};
pub use legacy::LegacyImportResult;

use crate::entry::find_by_id;
use crate::options::ImporterOptions;
use crate::resolution::Resolution;
use crate::resolver::PackageResolver;
use crate::specifier::{self, ParsedSpecifier};
use crate::subpath::find_by_id_with_path_name;

/// Sub-path that refers to the package itself (`@use "pkg/."`)
const CURRENT_DIR: &str = ".";

/// Package importer bound to one resolver and one immutable set of options
pub struct Importer<R: PackageResolver> {
    resolver: R,
    options: ImporterOptions<R::Options>,
}

impl<R: PackageResolver> Importer<R> {
    pub fn new(resolver: R, options: ImporterOptions<R::Options>) -> Self {
        Self { resolver, options }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn options(&self) -> &ImporterOptions<R::Options> {
        &self.options
    }

    /// Parse `url` with this importer's package prefix
    pub fn parse(&self, url: &str) -> ParsedSpecifier {
        specifier::parse(url, &self.options.package_prefix)
    }

    /// Resolve `url` to a stylesheet file
    ///
    /// Specifiers that do not name a package resolve to
    /// [`Resolution::NotFound`] without consulting the resolver.
    pub async fn resolve(&self, url: &str) -> Resolution {
        let ParsedSpecifier { id, path_name } = self.parse(url);
        let Some(id) = id else {
            tracing::debug!(url, "specifier does not name a package");
            return Resolution::NotFound;
        };

        let resolution = match path_name.as_deref() {
            Some(path_name) if path_name != CURRENT_DIR => {
                find_by_id_with_path_name(&self.resolver, &id, path_name, &self.options).await
            }
            _ => find_by_id(&self.resolver, &id, &self.options).await,
        };

        match &resolution {
            Resolution::File(file) => tracing::debug!(url, file = %file.display(), "resolved"),
            Resolution::Error(err) => tracing::debug!(url, error = %err, "resolution failed"),
            Resolution::NotFound => tracing::debug!(url, "no stylesheet found"),
        }
        resolution
    }

    /// File-URL importer view of this importer
    pub fn file_importer(&self) -> FileImporter<'_, R> {
        FileImporter::new(self)
    }
}
