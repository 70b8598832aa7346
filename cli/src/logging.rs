use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when RUST_LOG is unset
const DEFAULT_FILTER: &str = "sass_importer=warn";

/// Filter used with `--verbose`
const VERBOSE_FILTER: &str = "sass_importer=debug,sass_importer_cli=debug";

/// Initialize logging for the sass-importer CLI
///
/// Logs go to stderr so stdout stays reserved for resolved paths.
///
/// The log level can be controlled via the RUST_LOG environment variable:
/// - RUST_LOG=trace sass-importer resolve bootstrap  (every probed candidate)
/// - RUST_LOG=debug sass-importer resolve bootstrap  (resolution outcomes)
///
/// RUST_LOG takes precedence over `--verbose`.
pub fn init(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    Ok(())
}

fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    }
}
