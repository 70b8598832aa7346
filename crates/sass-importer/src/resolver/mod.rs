//! Package resolution service
//!
//! The importer does not walk `node_modules` itself; it hands each request
//! (`bootstrap`, `bootstrap/scss/_grid.scss`, ...) to a [`PackageResolver`]
//! and only decides which request to make and which answer to keep.
//! [`NodeResolver`] is the filesystem implementation following Node's
//! `require` lookup rules.

pub mod node;

pub use node::{NodeResolver, NodeResolverOptions};

use crate::error::ResolveError;
use crate::manifest::PackageManifest;
use async_trait::async_trait;
use std::path::PathBuf;

/// A file located by a [`PackageResolver`], with the manifest of the
/// package that owns it
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPackage {
    pub file: PathBuf,
    pub manifest: PackageManifest,
}

/// Resolves package ids and package-relative requests to files
#[async_trait]
pub trait PackageResolver: Send + Sync {
    /// Resolver-specific options, passed through from
    /// [`ImporterOptions::resolver_options`](crate::ImporterOptions)
    type Options: Send + Sync;

    /// Resolve a bare package id (`bootstrap`, `@scope/pkg`) or a
    /// package-relative request (`bootstrap/scss/_grid.scss`)
    async fn resolve(
        &self,
        request: &str,
        options: &Self::Options,
    ) -> Result<ResolvedPackage, ResolveError>;
}

#[async_trait]
impl<R: PackageResolver + ?Sized> PackageResolver for std::sync::Arc<R> {
    type Options = R::Options;

    async fn resolve(
        &self,
        request: &str,
        options: &Self::Options,
    ) -> Result<ResolvedPackage, ResolveError> {
        (**self).resolve(request, options).await
    }
}
