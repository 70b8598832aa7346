//! `sass-importer resolve`

use anyhow::{Context, Result};
use sass_importer::{Importer, ImporterOptions, NodeResolver, Resolution};
use std::path::{Path, PathBuf};
use url::Url;

/// Output format for resolved files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Path,
    FileUrl,
}

/// One line of output per specifier
#[derive(Debug)]
pub struct Outcome {
    pub specifier: String,
    pub resolution: Resolution,
}

/// Resolve every specifier as if it were imported from `from`
///
/// When `from` is given and no base directory is configured, packages are
/// looked up from the directory containing `from`.
pub async fn resolve_all(
    specifiers: &[String],
    from: Option<&Path>,
    mut options: ImporterOptions,
) -> Result<Vec<Outcome>> {
    if options.resolver_options.basedir.is_none() {
        if let Some(dir) = from.and_then(Path::parent) {
            options.resolver_options.basedir = Some(dir.to_path_buf());
        }
    }

    let importer = Importer::new(NodeResolver::new(), options);
    let mut outcomes = Vec::with_capacity(specifiers.len());
    for specifier in specifiers {
        tracing::debug!(specifier = %specifier, "resolving");
        outcomes.push(Outcome {
            specifier: specifier.clone(),
            resolution: importer.resolve(specifier).await,
        });
    }
    Ok(outcomes)
}

/// Format a resolved file for stdout
pub fn format_file(file: &Path, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Path => Ok(file.display().to_string()),
        OutputFormat::FileUrl => Url::from_file_path(file)
            .map(String::from)
            .map_err(|()| anyhow::anyhow!("Cannot express {} as a file URL", file.display())),
    }
}

/// Run the command: print resolved files, report failures on stderr
pub async fn run(
    specifiers: &[String],
    from: Option<PathBuf>,
    options: ImporterOptions,
    format: OutputFormat,
) -> Result<()> {
    let from = match from {
        Some(path) => Some(
            std::path::absolute(&path)
                .with_context(|| format!("Invalid --from path: {}", path.display()))?,
        ),
        None => None,
    };

    let outcomes = resolve_all(specifiers, from.as_deref(), options).await?;

    let mut unresolved = 0;
    for outcome in &outcomes {
        match &outcome.resolution {
            Resolution::File(file) => println!("{}", format_file(file, format)?),
            Resolution::NotFound => {
                unresolved += 1;
                eprintln!("cannot resolve '{}': no stylesheet found", outcome.specifier);
            }
            Resolution::Error(err) => {
                unresolved += 1;
                eprintln!("cannot resolve '{}': {}", outcome.specifier, err);
            }
        }
    }

    if unresolved > 0 {
        anyhow::bail!(
            "{} of {} specifier(s) could not be resolved",
            unresolved,
            outcomes.len()
        );
    }
    Ok(())
}
