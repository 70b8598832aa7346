//! Stylesheet file recognition

use std::path::Path;

/// File extensions recognized as stylesheet sources, independent of the
/// extensions an importer is configured to probe
pub const STYLESHEET_EXTENSIONS: [&str; 2] = ["scss", "sass"];

/// Whether `path` names a `.scss` or `.sass` file
///
/// # Examples
///
/// ```
/// use sass_importer::is_stylesheet_file;
///
/// assert!(is_stylesheet_file("node_modules/bootstrap/scss/_grid.scss"));
/// assert!(is_stylesheet_file("theme.sass"));
/// assert!(!is_stylesheet_file("dist/css/bootstrap.css"));
/// assert!(!is_stylesheet_file("index.js"));
/// ```
pub fn is_stylesheet_file(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| STYLESHEET_EXTENSIONS.contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognizes_both_syntaxes() {
        assert!(is_stylesheet_file("/abs/pkg/_index.scss"));
        assert!(is_stylesheet_file("/abs/pkg/main.sass"));
    }

    #[test]
    fn test_rejects_other_files() {
        assert!(!is_stylesheet_file("/abs/pkg/index.js"));
        assert!(!is_stylesheet_file("/abs/pkg/style.css"));
        assert!(!is_stylesheet_file("/abs/pkg/scss"));
        assert!(!is_stylesheet_file("/abs/pkg/file.scss.map"));
        assert!(!is_stylesheet_file(""));
    }

    #[test]
    fn test_extension_match_is_case_sensitive() {
        assert!(!is_stylesheet_file("/abs/pkg/LOUD.SCSS"));
    }
}
