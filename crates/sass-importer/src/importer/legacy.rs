use super::Importer;
use crate::resolver::PackageResolver;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Result handed to a legacy importer callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyImportResult {
    pub file: PathBuf,
}

impl<R> Importer<R>
where
    R: PackageResolver + 'static,
    R::Options: 'static,
{
    /// Legacy callback importer
    ///
    /// Spawns the resolution on the current tokio runtime and calls `done`
    /// exactly once, with the resolved file or `None`. `prev` is the file that
    /// contains the rule. Resolver errors are reported as `None`.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn import<F>(self: &Arc<Self>, url: &str, prev: Option<&Path>, done: F) -> JoinHandle<()>
    where
        F: FnOnce(Option<LegacyImportResult>) + Send + 'static,
    {
        let importer = Arc::clone(self);
        let url = url.to_string();
        let prev = prev.map(Path::to_path_buf);

        tokio::spawn(async move {
            let result = importer.import_async(&url, prev.as_deref()).await;
            done(result);
        })
    }

    /// The value the legacy callback receives, without the callback
    pub async fn import_async(&self, url: &str, prev: Option<&Path>) -> Option<LegacyImportResult> {
        tracing::trace!(url, prev = ?prev, "legacy import");
        self.resolve(url)
            .await
            .into_file()
            .map(|file| LegacyImportResult { file })
    }
}
