//! In-memory resolver for unit tests

use crate::error::ResolveError;
use crate::manifest::PackageManifest;
use crate::resolver::{PackageResolver, ResolvedPackage};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

struct Entry {
    file: PathBuf,
    manifest: PackageManifest,
    delay_ms: u64,
}

/// Answers requests from a fixed table and records the order in which
/// requests were issued and settled
#[derive(Default)]
pub struct MockResolver {
    entries: HashMap<String, Entry>,
    requests: Mutex<Vec<String>>,
    completed: Mutex<Vec<String>>,
}

impl MockResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn package(mut self, request: &str, file: &str, manifest: serde_json::Value) -> Self {
        let manifest = serde_json::from_value(manifest).expect("manifest fixture");
        self.entries.insert(
            request.to_string(),
            Entry {
                file: PathBuf::from(file),
                manifest,
                delay_ms: 0,
            },
        );
        self
    }

    pub fn file(self, request: &str, file: &str) -> Self {
        self.delayed_file(request, file, 0)
    }

    pub fn delayed_file(mut self, request: &str, file: &str, delay_ms: u64) -> Self {
        self.entries.insert(
            request.to_string(),
            Entry {
                file: PathBuf::from(file),
                manifest: PackageManifest::default(),
                delay_ms,
            },
        );
        self
    }

    /// Requests in issue order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests in settle order
    pub fn completed(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }
}

#[async_trait]
impl PackageResolver for MockResolver {
    type Options = ();

    async fn resolve(&self, request: &str, _options: &()) -> Result<ResolvedPackage, ResolveError> {
        self.requests.lock().unwrap().push(request.to_string());

        let entry = self.entries.get(request);
        if let Some(delay) = entry.map(|e| e.delay_ms).filter(|ms| *ms > 0) {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        self.completed.lock().unwrap().push(request.to_string());

        match entry {
            Some(entry) => Ok(ResolvedPackage {
                file: entry.file.clone(),
                manifest: entry.manifest.clone(),
            }),
            None => Err(ResolveError::NotFound {
                request: request.to_string(),
                basedir: PathBuf::from("/"),
            }),
        }
    }
}
