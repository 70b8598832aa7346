//! Node-style package resolution
//!
//! Lookups follow Node's `require.resolve` rules, delegated to
//! [`oxc_resolver`]:
//!
//! ```text
//! request                  lookup
//! ./x, ../x, /x            basedir/x           (as file, then as directory)
//! pkg, pkg/sub, @s/pkg     <ancestor>/node_modules/<request> for every ancestor
//!                          of basedir, deepest first, then each extra search path
//!
//! as file:       X, X.js, ...            (configured extensions)
//! as directory:  X/package.json "main"   (as file, then as directory)
//!                X/index.js, ...
//! ```
//!
//! `exports` maps are ignored so that stylesheet sub-paths stay reachable in
//! packages that only export their JavaScript entry points.

use super::{PackageResolver, ResolvedPackage};
use crate::error::ResolveError;
use crate::manifest::PackageManifest;
use async_trait::async_trait;
use oxc_resolver::{ResolveOptions, Resolver};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Options for [`NodeResolver`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeResolverOptions {
    /// Directory to resolve from (defaults to the current working directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basedir: Option<PathBuf>,

    /// Extensions appended when loading a request as a file
    pub extensions: Vec<String>,

    /// Names of the directories searched for packages
    #[serde(alias = "moduleDirectory", alias = "moduleDirectories")]
    pub module_directories: Vec<String>,

    /// Extra search roots tried after the module directories
    pub paths: Vec<PathBuf>,

    /// Keep symlinked paths as-is instead of resolving them to their targets
    #[serde(alias = "preserveSymlinks")]
    pub preserve_symlinks: bool,
}

impl Default for NodeResolverOptions {
    fn default() -> Self {
        Self {
            basedir: None,
            extensions: vec![".js".to_string()],
            module_directories: vec!["node_modules".to_string()],
            paths: Vec::new(),
            preserve_symlinks: true,
        }
    }
}

impl NodeResolverOptions {
    pub fn with_basedir(mut self, basedir: impl Into<PathBuf>) -> Self {
        self.basedir = Some(basedir.into());
        self
    }

    /// Lookup options for the underlying resolver; `basedir` and `paths` are
    /// applied per request instead
    fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            extensions: self.extensions.clone(),
            modules: self.module_directories.clone(),
            exports_fields: Vec::new(),
            symlinks: !self.preserve_symlinks,
            ..ResolveOptions::default()
        }
    }

    fn same_lookup(&self, other: &Self) -> bool {
        self.extensions == other.extensions
            && self.module_directories == other.module_directories
            && self.preserve_symlinks == other.preserve_symlinks
    }
}

/// Filesystem [`PackageResolver`] using Node's lookup rules
///
/// The underlying resolver caches filesystem lookups; it is rebuilt only when
/// a request arrives with different lookup options.
#[derive(Default)]
pub struct NodeResolver {
    cached: Mutex<Option<(NodeResolverOptions, Arc<Resolver>)>>,
}

impl NodeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    fn resolver(&self, options: &NodeResolverOptions) -> Arc<Resolver> {
        let mut cached = self.cached.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((key, resolver)) = cached.as_ref() {
            if key.same_lookup(options) {
                return Arc::clone(resolver);
            }
        }
        let resolver = Arc::new(Resolver::new(options.resolve_options()));
        *cached = Some((options.clone(), Arc::clone(&resolver)));
        resolver
    }
}

fn basedir(options: &NodeResolverOptions) -> Result<PathBuf, ResolveError> {
    let cwd = || std::env::current_dir().map_err(|e| ResolveError::InvalidBasedir(e.to_string()));
    match &options.basedir {
        Some(dir) if dir.is_absolute() => Ok(dir.clone()),
        Some(dir) => Ok(cwd()?.join(dir)),
        None => cwd(),
    }
}

#[async_trait]
impl PackageResolver for NodeResolver {
    type Options = NodeResolverOptions;

    async fn resolve(
        &self,
        request: &str,
        options: &NodeResolverOptions,
    ) -> Result<ResolvedPackage, ResolveError> {
        let basedir = basedir(options)?;
        let resolver = self.resolver(options);
        let paths = options.paths.clone();
        let owned_request = request.to_string();
        let lookup_dir = basedir.clone();

        let resolved = tokio::task::spawn_blocking(move || {
            lookup(&resolver, &lookup_dir, &owned_request, &paths)
        })
        .await
        .map_err(|err| ResolveError::Io {
            path: basedir.clone(),
            source: io::Error::other(err),
        })?;

        match resolved {
            Ok(package) => {
                tracing::trace!(
                    request,
                    file = %package.file.display(),
                    package = package.manifest.name(),
                    "module resolved"
                );
                Ok(package)
            }
            Err(err) => {
                tracing::trace!(request, basedir = %basedir.display(), error = %err, "module not resolved");
                Err(convert_error(err, request, &basedir))
            }
        }
    }
}

/// Resolve from `basedir`, then as a path inside each extra search root
fn lookup(
    resolver: &Resolver,
    basedir: &Path,
    request: &str,
    paths: &[PathBuf],
) -> Result<ResolvedPackage, oxc_resolver::ResolveError> {
    let mut result = resolver.resolve(basedir, request);
    if is_bare_request(request) {
        for root in paths {
            match result {
                Err(oxc_resolver::ResolveError::NotFound(_)) => {
                    result = resolver.resolve(root, &format!("./{request}"));
                }
                _ => break,
            }
        }
    }

    let resolution = result?;
    let manifest = match resolution.package_json() {
        Some(package_json) => {
            let raw: &serde_json::Value = package_json.raw_json();
            PackageManifest::from_value(raw)
        }
        None => PackageManifest::default(),
    };
    Ok(ResolvedPackage {
        file: resolution.path().to_path_buf(),
        manifest,
    })
}

/// Whether `request` names a package rather than a path
fn is_bare_request(request: &str) -> bool {
    !(request == "."
        || request == ".."
        || request.starts_with("./")
        || request.starts_with("../")
        || Path::new(request).is_absolute())
}

fn convert_error(err: oxc_resolver::ResolveError, request: &str, basedir: &Path) -> ResolveError {
    match err {
        oxc_resolver::ResolveError::NotFound(_) => ResolveError::NotFound {
            request: request.to_string(),
            basedir: basedir.to_path_buf(),
        },
        oxc_resolver::ResolveError::JSON(json) => ResolveError::Manifest {
            path: json.path,
            message: json.message,
        },
        other => ResolveError::Io {
            path: basedir.to_path_buf(),
            source: io::Error::other(other),
        },
    }
}
