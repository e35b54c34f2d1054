//! The config file of `ckb-unique`.
//!
//! Every section and every key is optional, an absent file means all defaults.
//!
//! ```toml
//! [logger]
//! filter = "info"
//!
//! [builder]
//! network = "testnet"
//! fee_rate = 1100
//! max_fee = 20000000
//! min_cell_capacity = 6100000000
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{BuilderConfig, LogConfig, NetworkProfile};

/// The name of the config file looked up in the config directory.
pub const CONFIG_FILE_NAME: &str = "ckb-unique.toml";

/// Errors when loading the config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}

// change the order of fields will break serialization, tables must come last in toml.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub logger: LogConfig,
    #[serde(default)]
    pub builder: BuilderConfig,
}

impl AppConfig {
    pub fn load_from_slice(slice: &[u8]) -> Result<Self, ConfigError> {
        Ok(toml::from_slice(slice)?)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load_from_slice(&content)
    }

    /// Loads `ckb-unique.toml` in `root_dir`, falls back to the defaults when it does not exist.
    pub fn load_from_dir<P: AsRef<Path>>(root_dir: P) -> Result<Self, ConfigError> {
        let path = root_dir.as_ref().join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn logger(&self) -> &LogConfig {
        &self.logger
    }

    pub fn builder(&self) -> &BuilderConfig {
        &self.builder
    }

    pub fn network_profile(&self) -> NetworkProfile {
        NetworkProfile::from_network(self.builder.network)
    }
}
