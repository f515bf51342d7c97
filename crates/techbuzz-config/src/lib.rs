use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use techbuzz_engine::MapView;
use techbuzz_engine::preview::assets::{DEFAULT_LEAFLET_VERSION, DEFAULT_PYODIDE_VERSION};
use thiserror::Error;

pub const DEFAULT_SITE_NAME: &str = "TechBuzz";
pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://formspree.io/f/mvgadnda";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Location shown by the contact page map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    pub popup: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        let MapView {
            latitude,
            longitude,
            zoom,
            popup,
        } = MapView::default();
        Self {
            latitude,
            longitude,
            zoom,
            popup,
        }
    }
}

impl From<&MapConfig> for MapView {
    fn from(map: &MapConfig) -> Self {
        Self {
            latitude: map.latitude,
            longitude: map.longitude,
            zoom: map.zoom,
            popup: map.popup.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site_name: String,
    /// Form submission target; `$VAR` references are expanded on load.
    pub contact_endpoint: String,
    pub leaflet_version: String,
    pub pyodide_version: String,
    pub map: MapConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_name: DEFAULT_SITE_NAME.to_string(),
            contact_endpoint: DEFAULT_CONTACT_ENDPOINT.to_string(),
            leaflet_version: DEFAULT_LEAFLET_VERSION.to_string(),
            pyodide_version: DEFAULT_PYODIDE_VERSION.to_string(),
            map: MapConfig::default(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Keep the literal value when a referenced variable is unset
        if let Some(expanded) = Self::expand_env(&config.contact_endpoint) {
            config.contact_endpoint = expanded;
        }

        Ok(Some(config))
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/techbuzz");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_env(value: &str) -> Option<String> {
        match shellexpand::env(value) {
            Ok(expanded) => Some(expanded.into_owned()),
            Err(_) => None,
        }
    }
}
