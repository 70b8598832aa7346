//! Common test utilities and fixtures
//!
//! This module provides shared test helpers for sass-importer CLI tests.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A project directory with installed packages under node_modules
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let project = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        project.write("package.json", r#"{"name":"app"}"#);
        project.write(
            "node_modules/theme/package.json",
            r#"{"name":"theme","main":"index.js","sass":"scss/theme.scss"}"#,
        );
        project.write("node_modules/theme/index.js", "");
        project.write("node_modules/theme/scss/theme.scss", "");
        project.write("node_modules/theme/scss/_grid.scss", "");
        project.write(
            "node_modules/@scope/pkg/package.json",
            r#"{"name":"@scope/pkg","main":"_index.scss"}"#,
        );
        project.write("node_modules/@scope/pkg/_index.scss", "");
        project.write("node_modules/@scope/pkg/sub/widget.sass", "");
        project.write("node_modules/lodash/package.json", r#"{"name":"lodash"}"#);
        project.write("node_modules/lodash/index.js", "");
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        std::fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    /// A command running inside the project with an isolated config directory
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("sass-importer").unwrap();
        let home = self.path(".home");

        // Set HOME so the default config goes to a test location
        cmd.current_dir(self.root())
            .env("HOME", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env_remove("RUST_LOG");
        cmd
    }
}
