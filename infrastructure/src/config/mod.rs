//! Configuration file loading for ryg-status
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables prefixed `RYG_` (nested with `__`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./ryg-status.toml` or `./.ryg-status.toml`
//! 4. Global: `$XDG_CONFIG_HOME/ryg-status/config.toml`
//! 5. Default values
//!
//! CLI flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    FileClassifierConfig, FileConfig, FileLoggingConfig, FileOpenAiConfig, FileProvidersConfig,
    FileQuestionsConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
