use crate::error::CaveError;
use crate::pathfinding::GoalApproach;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub cave: CaveConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct CaveConfig {
    /// Cave file used when none is given on the command line
    #[serde(default)]
    pub grid_file: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct SearchConfig {
    #[serde(default)]
    pub goal_approach: GoalApproach,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default)]
    pub json: bool,
}

// Default values
fn default_log_level() -> String { "warn".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Parse a TOML document
    pub fn from_toml(contents: &str, path: &Path) -> Result<Self, CaveError> {
        toml::from_str(contents).map_err(|source| CaveError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path`. A missing file gives the defaults; a malformed one is an error.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, CaveError> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config = Self::from_toml(&contents, path)?;
                info!(path = %path.display(), "loaded configuration");
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no config file, using defaults");
                Ok(Config::default())
            }
            Err(e) => Err(CaveError::from_io(path, e)),
        }
    }

    /// Load `config.toml` from the working directory, falling back to the
    /// defaults if it is unreadable or malformed. The error is handed back so
    /// it can be reported once logging is set up.
    pub fn load() -> (Self, Option<CaveError>) {
        match Self::load_from(DEFAULT_CONFIG_PATH) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        }
    }
}
