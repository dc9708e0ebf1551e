//! Configuration file loading for pareto
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PARETO_*` environment variables (`PARETO_API__URL`, ...)
//! 2. `--config <path>` specified file
//! 3. Project root: `./pareto.toml` or `./.pareto.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/pareto/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_API_URL, FileApiConfig, FileClipboardConfig, FileConfig,
    FileModelConfig, FileOutputConfig, FileReplConfig,
};
pub use loader::ConfigLoader;
