use crate::error::{JotError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// 5 MB, the backend's attachment limit.
const DEFAULT_MAX_ATTACHMENT_SIZE: u64 = 5_000_000;
const DEFAULT_API_URL: &str = "https://api.scratch-notes.example.com";

/// Configuration for jot, stored in the platform config dir as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JotConfig {
    /// Base URL of the notes service API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bearer token from the last `jot login`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Client-side attachment size limit in bytes, checked before upload
    #[serde(default = "default_max_attachment_size")]
    pub max_attachment_size: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_max_attachment_size() -> u64 {
    DEFAULT_MAX_ATTACHMENT_SIZE
}

impl Default for JotConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
            max_attachment_size: DEFAULT_MAX_ATTACHMENT_SIZE,
        }
    }
}

impl JotConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(JotError::Io)?;
        let config: JotConfig = serde_json::from_str(&content).map_err(JotError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(JotError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(JotError::Serialization)?;
        fs::write(config_path, content).map_err(JotError::Io)?;
        Ok(())
    }
}
