//! Application configuration loaded from a YAML file.
//!
//! The config path comes from `PACK_CONFIG` or defaults to `pack.yaml`
//! in the working directory. A missing or unparsable file logs a
//! warning and falls back to defaults; configuration problems never
//! prevent the client from starting.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default public endpoint of the posts API.
pub const DEFAULT_API_URL: &str = "https://pack-api.raiyanrahmanxx.workers.dev";

/// Application configuration.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the remote posts API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Display name used for submitted posts
    #[serde(default = "default_user")]
    pub user: String,

    /// Active visual theme (determines the attachment palette)
    #[serde(default)]
    pub theme: String,

    /// Path of the read-tracking state file
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_user() -> String {
    "anonymous".to_string()
}

fn default_state_file() -> PathBuf {
    PathBuf::from(".pack-state.json")
}

impl AppConfig {
    /// Resolve the config path from `PACK_CONFIG`, or `pack.yaml`.
    pub fn default_path() -> PathBuf {
        std::env::var("PACK_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("pack.yaml"))
    }

    /// Load configuration from a file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), user = %config.user, "Loaded configuration");
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::debug!(%e, path = %path.display(), "No config file, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user: default_user(),
            theme: String::new(),
            state_file: default_state_file(),
        }
    }
}
