use std::path::PathBuf;
use thiserror::Error;

/// Failures reported by a [`PackageResolver`](crate::PackageResolver)
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Cannot find module '{request}' from '{}'", basedir.display())]
    NotFound { request: String, basedir: PathBuf },

    #[error("Invalid package manifest {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },

    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid base directory: {0}")]
    InvalidBasedir(String),
}

impl ResolveError {
    /// True for the expected "no such module" failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, ResolveError::NotFound { .. })
    }
}
