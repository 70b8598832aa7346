//! Configuration management for sass-importer
//!
//! ## Architecture
//!
//! - `schema` - Configuration data structures
//! - `io` - Reading and rendering config files
//! - `paths` - Directory path management
//!
//! ## Usage
//!
//! ```rust
//! use sass_importer_cli::config;
//!
//! # fn example() -> anyhow::Result<()> {
//! // Load config (returns default if file doesn't exist)
//! let config = config::load_config()?;
//! println!("{:?}", config.importer.main_fields);
//! # Ok(())
//! # }
//! ```

pub mod io;
pub mod paths;
pub mod schema;

// Re-export commonly used items
pub use io::{load, load_config, load_config_from, to_toml};
pub use paths::{get_config_dir, get_config_path};
pub use schema::SassImporterConfig;
