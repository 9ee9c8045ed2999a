use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.alternative.me/fng/?limit=0";
pub const DEFAULT_OUTPUT_PATH: &str = r"D:\Listen2FM_Viewer\data\crypto\fg_index\fear_greed_all.json";
pub const DEFAULT_LOG_FILE: &str = "fear_greed_index.log";
pub const CONFIG_FILE: &str = "config.json";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

fn default_log_file() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_LOG_FILE))
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default = "default_log_file")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: default_api_url(),
            output_path: default_output_path(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// Reads the config file at `path`, falling back to the built-in defaults when it
    /// does not exist. Keys missing from the file keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}
