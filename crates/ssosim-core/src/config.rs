//! Application configuration management.
//!
//! Configuration selects the storage backend and where file storage lives.
//! It is stored at `~/.config/ssosim/config.json`; a missing file means
//! defaults. `SSOSIM_BACKEND` and `SSOSIM_STORAGE_DIR` override the file.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SsoError};
use crate::storage::{FileStorage, KeychainStorage, KeyValueStorage};

/// Application name used for config/data directory paths
const APP_NAME: &str = "ssosim";

/// Config file name
const CONFIG_FILE: &str = "config.json";

const ENV_BACKEND: &str = "SSOSIM_BACKEND";
const ENV_STORAGE_DIR: &str = "SSOSIM_STORAGE_DIR";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    File,
    Keyring,
}

impl FromStr for Backend {
    type Err = SsoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(Backend::File),
            "keyring" | "keychain" => Ok(Backend::Keyring),
            other => Err(SsoError::InvalidConfig(format!(
                "Unknown storage backend '{}' (expected 'file' or 'keyring')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub backend: Backend,
    pub storage_dir: Option<PathBuf>,
}

impl Config {
    /// Load from the default location and apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Apply overrides from a variable lookup (the environment, in practice).
    /// Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(backend) = lookup(ENV_BACKEND).filter(|v| !v.trim().is_empty()) {
            self.backend = backend.parse()?;
        }
        if let Some(dir) = lookup(ENV_STORAGE_DIR).filter(|v| !v.trim().is_empty()) {
            self.storage_dir = Some(PathBuf::from(dir));
        }
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SsoError::InvalidConfig("Could not find config directory".to_string()))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory for file storage: the override if set, else the data dir
    pub fn storage_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.storage_dir {
            return Ok(dir.clone());
        }
        let data_dir = dirs::data_dir()
            .ok_or_else(|| SsoError::InvalidConfig("Could not find data directory".to_string()))?;
        Ok(data_dir.join(APP_NAME))
    }

    /// Build the configured storage backend
    pub fn open_storage(&self) -> Result<Box<dyn KeyValueStorage>> {
        match self.backend {
            Backend::File => Ok(Box::new(FileStorage::new(self.storage_dir()?))),
            Backend::Keyring => Ok(Box::new(KeychainStorage::open()?)),
        }
    }
}
