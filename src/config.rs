//! Application configuration.
//!
//! Configuration is read from a toml file under the platform config
//! directory and can be overridden per-invocation with CLI flags.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::Args;

const CONFIG_DIR: &str = "skippick";
const CONFIG_FILE: &str = "config.toml";

/// Connection settings for the skip hire API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }
}

/// The location offerings are fetched for.
///
/// Required input to the fetcher; nothing in the client hardcodes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    pub postcode: String,
    pub area: String,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            postcode: "NR32".to_string(),
            area: "Lowestoft".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Catppuccin Mocha".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub location: LocationConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl AppConfig {
    /// Apply CLI flag overrides on top of file/default values.
    pub fn apply_cli(&mut self, args: &Args) {
        if let Some(postcode) = &args.postcode {
            self.location.postcode = postcode.clone();
        }
        if let Some(area) = &args.area {
            self.location.area = area.clone();
        }
        if let Some(base_url) = &args.base_url {
            self.api.base_url = base_url.clone();
        }
        if let Some(theme) = &args.theme {
            self.theme.name = theme.clone();
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(CONFIG_DIR))
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(CONFIG_FILE))
}

pub fn load() -> color_eyre::Result<AppConfig> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            tracing::debug!("No config directory found, using defaults");
            return Ok(AppConfig::default());
        }
    };

    if !path.exists() {
        tracing::debug!("Config file not found at {:?}, using defaults", path);
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(&path)?;
    let config: AppConfig = toml::from_str(&content)?;
    tracing::debug!("Loaded config from {:?}", path);
    Ok(config)
}
