//! Package entry point resolution
//!
//! A specifier without a sub-path (`bootstrap`, `@scope/pkg`) names a whole
//! package. Its stylesheet entry point is:
//!
//! 1. the package's main file, when that file is already a stylesheet;
//! 2. otherwise the first configured manifest field (`scss`, `sass`, ...)
//!    whose value resolves to a stylesheet inside the package.

use crate::options::ImporterOptions;
use crate::resolution::Resolution;
use crate::resolver::PackageResolver;
use crate::stylesheet::is_stylesheet_file;
use futures_util::future;

/// Resolve the stylesheet entry point of package `id`
///
/// Manifest fields are resolved concurrently, but the winner is always the
/// first field in `main_fields` order, regardless of which request settles
/// first.
#[tracing::instrument(level = "debug", skip(resolver, options))]
pub async fn find_by_id<R: PackageResolver>(
    resolver: &R,
    id: &str,
    options: &ImporterOptions<R::Options>,
) -> Resolution {
    let package = match resolver.resolve(id, &options.resolver_options).await {
        Ok(package) => package,
        Err(err) => return Resolution::Error(err),
    };

    if is_stylesheet_file(&package.file) {
        return Resolution::File(package.file);
    }

    let requests: Vec<_> = options
        .main_fields
        .iter()
        .filter_map(|field| {
            let value = package.manifest.string_field(field)?;
            tracing::trace!(field = %field, value, "probing manifest field");
            Some(format!("{id}/{value}"))
        })
        .collect();

    let results = future::join_all(
        requests
            .iter()
            .map(|request| resolver.resolve(request, &options.resolver_options)),
    )
    .await;

    results
        .into_iter()
        .filter_map(Result::ok)
        .map(|resolved| resolved.file)
        .find(|file| is_stylesheet_file(file))
        .map_or(Resolution::NotFound, Resolution::File)
}
