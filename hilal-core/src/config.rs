//! Global hilal configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::error::{HilalError, HilalResult};
use crate::timeline::CalendarFilter;

static DEFAULT_STORE_PATH: &str = "~/.hilal/store.json";

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

fn default_filter() -> String {
    CalendarFilter::default().to_string()
}

/// Global configuration at ~/.config/hilal/config.toml
#[derive(Debug, Deserialize, Clone)]
pub struct HilalConfig {
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,

    /// Timeline filter used until one is chosen explicitly.
    #[serde(default = "default_filter")]
    pub default_filter: String,
}

impl Default for HilalConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            default_filter: default_filter(),
        }
    }
}

impl HilalConfig {
    pub fn config_path() -> HilalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| HilalError::Config("Could not determine config directory".into()))?
            .join("hilal");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads the global config, creating a commented default file first if
    /// none exists.
    pub fn load() -> HilalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Loads config from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> HilalResult<Self> {
        let config: HilalConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| HilalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| HilalError::Config(e.to_string()))?;

        config.default_filter()?;
        Ok(config)
    }

    /// Store path with `~` expanded.
    pub fn store_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.store_path.to_string_lossy()).into_owned();
        PathBuf::from(expanded)
    }

    pub fn default_filter(&self) -> HilalResult<CalendarFilter> {
        self.default_filter
            .parse()
            .map_err(|e: HilalError| HilalError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> HilalResult<()> {
        let contents = format!(
            "\
# hilal configuration

# Where your people and preferences are stored:
# store_path = \"{}\"

# Timeline filter until you pick one (gregorian, hijri or both):
# default_filter = \"both\"
",
            DEFAULT_STORE_PATH
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                HilalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| HilalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
