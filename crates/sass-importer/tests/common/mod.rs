//! Common test utilities and fixtures
//!
//! Builds small `node_modules` trees in a temporary directory, shaped like
//! the packages stylesheet projects commonly depend on.

#![allow(dead_code)]

use sass_importer::{Importer, ImporterOptions, NodeResolver, NodeResolverOptions};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A project directory with installed packages
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let project = Self { dir };
        project.write("package.json", r#"{"name":"app","private":true}"#);
        project
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `rel`, creating parent directories
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().expect("fixture path has a parent"))
            .expect("Failed to create fixture directory");
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    /// Path of `rel` inside the project
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Package whose JS main sits beside a `sass` field entry point
    pub fn with_bootstrap(self) -> Self {
        self.write(
            "node_modules/bootstrap/package.json",
            r#"{
                "name": "bootstrap",
                "version": "5.3.3",
                "main": "dist/js/bootstrap.js",
                "style": "dist/css/bootstrap.css",
                "sass": "scss/bootstrap.scss"
            }"#,
        );
        self.write("node_modules/bootstrap/dist/js/bootstrap.js", "");
        self.write("node_modules/bootstrap/dist/css/bootstrap.css", "");
        self.write(
            "node_modules/bootstrap/scss/bootstrap.scss",
            "@import \"accordion\";\n",
        );
        self.write("node_modules/bootstrap/scss/_accordion.scss", ".accordion {}\n");
        self.write("node_modules/bootstrap/scss/mixins/_banner.scss", "");
        self
    }

    /// Scoped package whose `main` is already a stylesheet
    pub fn with_hidoo_unit(self) -> Self {
        self.write(
            "node_modules/@hidoo/unit/package.json",
            r#"{"name": "@hidoo/unit", "main": "src/index.scss"}"#,
        );
        self.write("node_modules/@hidoo/unit/src/index.scss", "");
        self.write("node_modules/@hidoo/unit/src/_settings.scss", "$font-base-size: 16px;\n");
        self.write("node_modules/@hidoo/unit/src/unit/icon/_core.scss", "");
        self
    }

    /// Scoped package exercising the partial and index precedence rules
    pub fn with_scope_pkg(self) -> Self {
        self.write(
            "node_modules/@scope/pkg/package.json",
            r#"{"name": "@scope/pkg", "sass": "_index.scss"}"#,
        );
        self.write("node_modules/@scope/pkg/index.js", "");
        self.write("node_modules/@scope/pkg/_index.scss", "");
        self.write("node_modules/@scope/pkg/sub/_widget.scss", "");
        self.write("node_modules/@scope/pkg/sub/widget.scss", "");
        self.write("node_modules/@scope/pkg/sub/button.scss", "");
        self.write("node_modules/@scope/pkg/sub/button/index.scss", "");
        self.write("node_modules/@scope/pkg/sub/forms/_index.sass", "");
        self
    }

    pub fn resolver_options(&self) -> NodeResolverOptions {
        NodeResolverOptions::default().with_basedir(self.root())
    }

    pub fn importer(&self) -> Importer<NodeResolver> {
        self.importer_with(ImporterOptions::default())
    }

    pub fn importer_with(&self, options: ImporterOptions) -> Importer<NodeResolver> {
        Importer::new(
            NodeResolver::new(),
            options.with_resolver_options(self.resolver_options()),
        )
    }
}
