//! `sass-importer candidates`
//!
//! Shows how a specifier is split and which requests would be probed for it,
//! without touching the filesystem.

use sass_importer::specifier::parse;
use sass_importer::subpath::candidate_requests;
use sass_importer::ImporterOptions;

/// Render the probe plan for `specifier` as printable lines
pub fn describe(specifier: &str, options: &ImporterOptions) -> Vec<String> {
    let parsed = parse(specifier, &options.package_prefix);
    let Some(id) = parsed.id else {
        return vec![format!("'{specifier}' does not name a package")];
    };

    let mut lines = vec![format!("id: {id}")];
    match parsed.path_name.as_deref() {
        None | Some(".") => {
            lines.push("path: (none)".to_string());
            lines.push(format!(
                "entry point: main file of '{id}', then manifest fields {}",
                options.main_fields.join(", ")
            ));
        }
        Some(path_name) => {
            lines.push(format!("path: {path_name}"));
            let requests = candidate_requests(&id, path_name, &options.extensions);
            if requests.is_empty() {
                lines.push("no candidates: extension list is empty".to_string());
            }
            lines.extend(requests);
        }
    }
    lines
}

pub fn run(specifier: &str, options: &ImporterOptions) {
    for line in describe(specifier, options) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_sub_path() {
        let lines = describe("~@hidoo/unit/src/unit/icon/core", &ImporterOptions::default());
        assert_eq!(lines[0], "id: @hidoo/unit");
        assert_eq!(lines[1], "path: src/unit/icon/core");
        assert_eq!(
            &lines[2..],
            &[
                "@hidoo/unit/src/unit/icon/_core.scss",
                "@hidoo/unit/src/unit/icon/_core.sass",
                "@hidoo/unit/src/unit/icon/core/_index.scss",
                "@hidoo/unit/src/unit/icon/core/_index.sass",
                "@hidoo/unit/src/unit/icon/core.scss",
                "@hidoo/unit/src/unit/icon/core.sass",
                "@hidoo/unit/src/unit/icon/core/index.scss",
                "@hidoo/unit/src/unit/icon/core/index.sass",
            ]
        );
    }

    #[test]
    fn test_describe_entry_point() {
        let lines = describe("bootstrap", &ImporterOptions::default());
        assert_eq!(lines[0], "id: bootstrap");
        assert_eq!(lines[1], "path: (none)");
        assert_eq!(
            lines[2],
            "entry point: main file of 'bootstrap', then manifest fields scss, sass, main.scss, main.sass"
        );
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_describe_current_dir_is_entry_point() {
        let lines = describe("@scope/pkg/.", &ImporterOptions::default());
        assert_eq!(lines[1], "path: (none)");
    }

    #[test]
    fn test_describe_not_a_package() {
        let lines = describe("@scope", &ImporterOptions::default());
        assert_eq!(lines, vec!["'@scope' does not name a package"]);
    }

    #[test]
    fn test_describe_empty_extensions() {
        let options = ImporterOptions::default().with_extensions(Vec::<String>::new());
        let lines = describe("pkg/a", &options);
        assert_eq!(lines[2], "no candidates: extension list is empty");
        assert_eq!(lines.len(), 3);
    }
}
