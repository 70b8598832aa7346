//! Uniform result shared by the entry and sub-path resolvers

use crate::error::ResolveError;
use std::path::{Path, PathBuf};

/// Outcome of resolving one specifier
///
/// `NotFound` is the "nothing matched, nothing broke" case and is distinct
/// from `Error`, which carries a failure reported by the package resolver.
#[derive(Debug)]
pub enum Resolution {
    File(PathBuf),
    Error(ResolveError),
    NotFound,
}

impl Resolution {
    pub fn file(&self) -> Option<&Path> {
        match self {
            Resolution::File(path) => Some(path),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ResolveError> {
        match self {
            Resolution::Error(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound)
    }

    /// Collapse to the file path, dropping errors and misses alike
    pub fn into_file(self) -> Option<PathBuf> {
        match self {
            Resolution::File(path) => Some(path),
            _ => None,
        }
    }
}

impl From<Result<PathBuf, ResolveError>> for Resolution {
    fn from(result: Result<PathBuf, ResolveError>) -> Self {
        match result {
            Ok(path) => Resolution::File(path),
            Err(err) => Resolution::Error(err),
        }
    }
}
