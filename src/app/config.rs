use super::keymap::KeyConfig;
use super::persistence::get_config_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings read from `~/.config/sqlviz/config.toml`. Every field is optional
/// in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where persisted blobs and the log file live.
    pub data_dir: Option<PathBuf>,
    /// Where exports are written. Defaults to the working directory.
    pub export_dir: Option<PathBuf>,
    pub run_latency_ms: u64,
    pub toast_duration_ms: u64,
    pub keys: KeyConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            export_dir: None,
            run_latency_ms: 500,
            toast_duration_ms: 3000,
            keys: KeyConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads the user's config file. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        match get_config_dir() {
            Some(dir) => Self::load_from(&dir.join(CONFIG_FILENAME)),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(get_config_dir)
            .unwrap_or_else(|| PathBuf::from(".sqlviz"))
    }

    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    #[must_use]
    pub fn run_latency(&self) -> Duration {
        Duration::from_millis(self.run_latency_ms)
    }

    #[must_use]
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}
