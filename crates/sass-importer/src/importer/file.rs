use super::Importer;
use crate::resolver::PackageResolver;
use url::Url;

/// Context the compiler passes along with a specifier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalizeContext {
    /// URL of the stylesheet containing the rule, when known
    pub containing_url: Option<Url>,

    /// Whether the rule is an `@import` rather than `@use`/`@forward`
    pub from_import: bool,
}

impl CanonicalizeContext {
    pub fn with_containing_url(containing_url: Url) -> Self {
        Self {
            containing_url: Some(containing_url),
            from_import: false,
        }
    }
}

/// File importer: maps a specifier to the `file://` URL of a stylesheet
pub struct FileImporter<'a, R: PackageResolver> {
    importer: &'a Importer<R>,
}

impl<'a, R: PackageResolver> FileImporter<'a, R> {
    pub fn new(importer: &'a Importer<R>) -> Self {
        Self { importer }
    }

    /// Resolve `url` to a file URL, or `None` when nothing matched or the
    /// resolver failed
    pub async fn find_file_url(&self, url: &str, context: &CanonicalizeContext) -> Option<Url> {
        let containing_file = context
            .containing_url
            .as_ref()
            .and_then(|containing| containing.to_file_path().ok());
        tracing::trace!(
            url,
            containing = ?containing_file,
            from_import = context.from_import,
            "find file url"
        );

        let file = self.importer.resolve(url).await.into_file()?;
        match Url::from_file_path(&file) {
            Ok(file_url) => Some(file_url),
            Err(()) => {
                tracing::debug!(file = %file.display(), "resolved path is not absolute");
                None
            }
        }
    }
}
