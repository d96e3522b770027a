//! Application configuration: where to listen, where to spool and which
//! printer profiles exist.

use rollprint_device::DEFAULT_DPI;
use rollprint_layout::{LayoutConfig, LayoutError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_PROFILE: &str = "default";
pub const DEFAULT_DEVICE: &str = "POSPrinter POS80";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Config file is not valid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Default profile '{0}' is not defined")]
    UnknownDefaultProfile(String),
    #[error("Profile '{profile}' has an invalid layout: {source}")]
    Layout {
        profile: String,
        source: LayoutError,
    },
    #[error("Profile '{0}' has a zero dpi")]
    ZeroDpi(String),
}

/// One printer as the service knows it: the device it addresses and how
/// documents are laid out for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterProfile {
    pub device_name: String,
    /// Resolution used to turn content height into roll length.
    pub dpi: u32,
    pub layout: LayoutConfig,
}

impl Default for PrinterProfile {
    fn default() -> Self {
        Self {
            device_name: DEFAULT_DEVICE.to_string(),
            dpi: DEFAULT_DPI,
            layout: LayoutConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bind: String,
    pub spool_dir: PathBuf,
    pub default_profile: String,
    pub profiles: BTreeMap<String, PrinterProfile>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:5000".to_string(),
            spool_dir: PathBuf::from("spool"),
            default_profile: DEFAULT_PROFILE.to_string(),
            profiles: BTreeMap::from([(DEFAULT_PROFILE.to_string(), PrinterProfile::default())]),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&raw)?;
        log::info!(
            "Loaded {} printer profile(s) from {}.",
            config.profiles.len(),
            path.display()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.profiles.contains_key(&self.default_profile) {
            return Err(ConfigError::UnknownDefaultProfile(
                self.default_profile.clone(),
            ));
        }
        for (name, profile) in &self.profiles {
            if profile.dpi == 0 {
                return Err(ConfigError::ZeroDpi(name.clone()));
            }
            profile
                .layout
                .validate()
                .map_err(|source| ConfigError::Layout {
                    profile: name.clone(),
                    source,
                })?;
        }
        Ok(())
    }

    pub fn profile(&self, name: &str) -> Option<&PrinterProfile> {
        self.profiles.get(name)
    }

    pub fn default_profile(&self) -> Option<&PrinterProfile> {
        self.profile(&self.default_profile)
    }
}
