// Use modules from the library crate
use sass_importer_cli::{commands, config, logging};

use anyhow::Result;
use clap::Parser;
use commands::resolve::OutputFormat;
use commands::OptionOverrides;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sass-importer",
    about = "Resolve package-style stylesheet imports (bootstrap, ~pkg/sub/path, @scope/pkg) to files",
    version
)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Resolve specifiers to stylesheet files
    ///
    /// Prints one line per resolved specifier. Unresolved specifiers are
    /// reported on stderr and make the command exit non-zero.
    ///
    /// Examples:
    ///   sass-importer resolve bootstrap
    ///   sass-importer resolve ~bootstrap/scss/mixins/banner
    ///   sass-importer resolve @scope/pkg/sub/widget --from src/main.scss --url
    Resolve {
        /// Specifiers as written in @use/@import/@forward
        #[arg(required = true)]
        specifiers: Vec<String>,

        /// Stylesheet containing the imports (packages are looked up from its directory)
        #[arg(long, value_name = "FILE")]
        from: Option<PathBuf>,

        /// Print file:// URLs instead of paths
        #[arg(long)]
        url: bool,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Show how a specifier is split and which candidate files would be probed
    Candidates {
        /// Specifier as written in @use/@import/@forward
        specifier: String,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Inspect the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(clap::Args)]
struct OptionArgs {
    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory packages are looked up from (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    basedir: Option<PathBuf>,

    /// Stylesheet extension to probe, in priority order (repeatable)
    #[arg(long = "extension", short = 'e', value_name = "EXT")]
    extensions: Vec<String>,

    /// Manifest field naming a stylesheet entry point, in priority order (repeatable)
    #[arg(long = "main-field", short = 'm', value_name = "NAME")]
    main_fields: Vec<String>,

    /// Prefix stripped from specifiers ("" disables stripping)
    #[arg(long, value_name = "PREFIX")]
    prefix: Option<String>,
}

impl OptionArgs {
    fn into_options(self) -> Result<sass_importer::ImporterOptions> {
        let file_config = config::load(self.config.as_deref())?;
        let overrides = OptionOverrides {
            extensions: self.extensions,
            main_fields: self.main_fields,
            package_prefix: self.prefix,
            basedir: self.basedir,
        };
        let options = overrides.apply(file_config);

        let merged = config::SassImporterConfig {
            importer: options.clone(),
        };
        if let Err(errors) = merged.validate() {
            anyhow::bail!("Invalid options:\n  {}", errors.join("\n  "));
        }
        Ok(options)
    }
}

#[derive(Parser)]
enum ConfigCommand {
    /// Print the default config file location
    Path,

    /// Print the effective configuration as TOML
    Show {
        /// Config file (defaults to the user config directory)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match cli.command {
        Command::Resolve {
            specifiers,
            from,
            url,
            options,
        } => {
            let format = if url {
                OutputFormat::FileUrl
            } else {
                OutputFormat::Path
            };
            commands::resolve::run(&specifiers, from, options.into_options()?, format).await
        }
        Command::Candidates { specifier, options } => {
            commands::candidates::run(&specifier, &options.into_options()?);
            Ok(())
        }
        Command::Config { command } => match command {
            ConfigCommand::Path => {
                println!("{}", config::get_config_path()?.display());
                Ok(())
            }
            ConfigCommand::Show { config } => {
                let loaded = config::load(config.as_deref())?;
                print!("{}", config::to_toml(&loaded)?);
                Ok(())
            }
        },
    }
}
