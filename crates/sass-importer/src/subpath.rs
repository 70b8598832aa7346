//! Sub-path candidate resolution
//!
//! `@use "pkg/dir/name"` may refer to any of these files, in this order:
//!
//! ```text
//! pkg/dir/_name.scss         partial
//! pkg/dir/_name.sass
//! pkg/dir/name/_index.scss   directory with partial index
//! pkg/dir/name/_index.sass
//! pkg/dir/name.scss          plain file
//! pkg/dir/name.sass
//! pkg/dir/name/index.scss    directory with index
//! pkg/dir/name/index.sass
//! ```
//!
//! Partials shadow plain files of the same name, and files shadow
//! directories of the same name.

use crate::options::ImporterOptions;
use crate::resolution::Resolution;
use crate::resolver::PackageResolver;
use crate::stylesheet::is_stylesheet_file;
use futures_util::future;

/// Split a sub-path into its directory part and final segment
///
/// ```
/// use sass_importer::subpath::split_path_name;
///
/// assert_eq!(split_path_name("scss/mixins/banner"), (Some("scss/mixins"), "banner"));
/// assert_eq!(split_path_name("settings"), (None, "settings"));
/// ```
pub fn split_path_name(path_name: &str) -> (Option<&str>, &str) {
    let trimmed = path_name.trim_end_matches('/');
    match trimmed.rsplit_once('/') {
        Some((dir, base)) if !dir.is_empty() => (Some(dir), base),
        Some((_, base)) => (None, base),
        None => (None, trimmed),
    }
}

/// File name templates for a base name, highest priority first
fn templates(base_name: &str) -> [String; 4] {
    [
        format!("_{base_name}"),
        format!("{base_name}/_index"),
        base_name.to_string(),
        format!("{base_name}/index"),
    ]
}

/// Every request tried for `id` + `path_name`, highest priority first
///
/// Template order is major, extension order minor.
pub fn candidate_requests(id: &str, path_name: &str, extensions: &[String]) -> Vec<String> {
    let (dir_name, base_name) = split_path_name(path_name);
    let prefix = match dir_name {
        Some(dir) => format!("{id}/{dir}"),
        None => id.to_string(),
    };
    let prefix = &prefix;

    templates(base_name)
        .iter()
        .flat_map(|template| {
            extensions
                .iter()
                .map(move |ext| format!("{prefix}/{template}{ext}"))
        })
        .collect()
}

/// Resolve `path_name` inside package `id` to a stylesheet file
///
/// All candidates are probed concurrently; the result is the
/// highest-priority candidate that resolved to a stylesheet. Candidates that
/// do not exist are expected and never reported as errors.
#[tracing::instrument(level = "debug", skip(resolver, options))]
pub async fn find_by_id_with_path_name<R: PackageResolver>(
    resolver: &R,
    id: &str,
    path_name: &str,
    options: &ImporterOptions<R::Options>,
) -> Resolution {
    let requests = candidate_requests(id, path_name, &options.extensions);
    tracing::trace!(candidates = requests.len(), "probing sub-path candidates");

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
