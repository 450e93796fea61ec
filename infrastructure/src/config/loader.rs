//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const APP_DIR: &str = "ryg-status";
const PROJECT_FILES: [&str; 2] = ["ryg-status.toml", ".ryg-status.toml"];
const ENV_PREFIX: &str = "RYG_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `RYG_*` environment variables (`RYG_SERVER__BIND`, ...)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./ryg-status.toml` or `./.ryg-status.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/ryg-status/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Build the merged figment without extracting it
    pub fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Load `.env` from the working directory (or a parent) into the process
    /// environment. Variables that are already set keep their values.
    pub fn load_dotenv() -> Option<PathBuf> {
        Self::report_dotenv(dotenvy::dotenv())
    }

    fn report_dotenv(result: Result<PathBuf, dotenvy::Error>) -> Option<PathBuf> {
        match result {
            Ok(path) => {
                debug!("Loaded environment from {}", path.display());
                Some(path)
            }
            Err(e) if e.not_found() => {
                debug!("No .env file found");
                None
            }
            Err(e) => {
                warn!("Ignoring unreadable .env file: {}", e);
                None
            }
        }
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/ryg-status/config.toml if set,
    /// otherwise falls back to ~/.config/ryg-status/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(explicit: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [ENV  ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = explicit {
            let marker = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:<5}] Explicit: {}", marker, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!(
                "  [     ] Project: ./{} or ./{}",
                PROJECT_FILES[0], PROJECT_FILES[1]
            );
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
