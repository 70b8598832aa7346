//! Specifier parsing
//!
//! Splits the URL of a `@use`/`@import`/`@forward` rule into the package
//! identifier and the sub-path inside that package:
//!
//! ```text
//! bootstrap                      → id: bootstrap
//! bootstrap/scss/grid            → id: bootstrap,      path: scss/grid
//! @scope/pkg/sub/widget          → id: @scope/pkg,     path: sub/widget
//! ~@scope/pkg                    → id: @scope/pkg      (legacy prefix stripped)
//! @scope                         → (no id)
//! ```
//!
//! Parsing never touches the filesystem and never fails; anything that does
//! not name a package yields an empty [`ParsedSpecifier`].

/// A specifier split into package id and sub-path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSpecifier {
    pub id: Option<String>,
    pub path_name: Option<String>,
}

impl ParsedSpecifier {
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
    }
}

/// Remove the legacy package prefix from the front of `url`
///
/// An empty prefix disables stripping.
pub fn strip_package_prefix<'a>(url: &'a str, package_prefix: &str) -> &'a str {
    if package_prefix.is_empty() {
        return url;
    }
    url.strip_prefix(package_prefix).unwrap_or(url)
}

/// Whether `url` names a scoped package (`@scope/name`)
pub fn is_scoped_package(url: &str) -> bool {
    url.starts_with('@')
}

/// Parse a raw specifier into package id and sub-path
///
/// # Examples
///
/// ```
/// use sass_importer::parse;
///
/// let parsed = parse("~@hidoo/unit/src/settings", "~");
/// assert_eq!(parsed.id.as_deref(), Some("@hidoo/unit"));
/// assert_eq!(parsed.path_name.as_deref(), Some("src/settings"));
///
/// assert!(parse("", "~").is_empty());
/// ```
pub fn parse(url: &str, package_prefix: &str) -> ParsedSpecifier {
    if url.is_empty() {
        return ParsedSpecifier::default();
    }

    let normalized = strip_package_prefix(url, package_prefix);
    let id_segments = if is_scoped_package(normalized) { 2 } else { 1 };

    let mut segments = normalized.split('/');
    let id: Vec<&str> = segments.by_ref().take(id_segments).collect();
    let path_name = segments.collect::<Vec<_>>().join("/");

    // A scoped id needs both the scope and a non-empty package name.
    if id.len() < id_segments || id.iter().any(|segment| segment.is_empty()) {
        return ParsedSpecifier::default();
    }
    if id_segments == 2 && id[0] == "@" {
        return ParsedSpecifier::default();
    }

    ParsedSpecifier {
        id: Some(id.join("/")),
        path_name: (!path_name.is_empty()).then_some(path_name),
    }
}
