use crate::core::path::config_file;
use crate::core::{RelgrabError, RelgrabResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding an access token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "RELGRAB_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the forge REST API
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Access token, required only for private repositories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// User-Agent header sent with every request (GitHub rejects requests without one)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Directory assets are written to (defaults to the current directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,

    /// Per-request timeout in seconds. No timeout when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Whether to draw a progress bar while downloading
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_user_agent() -> String {
    format!("relgrab/{}", env!("CARGO_PKG_VERSION"))
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token: None,
            user_agent: default_user_agent(),
            download_dir: None,
            timeout_secs: None,
            show_progress: true,
        }
    }
}

impl Config {
    /// Load config from [`config_file`], then apply environment overrides
    ///
    /// A missing file is not an error; defaults are used.
    pub fn load() -> RelgrabResult<Self> {
        let mut config = match config_file() {
            Ok(path) if path.exists() => Self::from_file(&path)?,
            _ => Self::default(),
        };

        config.apply_env(
            std::env::var(TOKEN_ENV).ok(),
            std::env::var(API_URL_ENV).ok(),
        );

        Ok(config)
    }

    /// Parse a config file
    pub fn from_file(path: &Path) -> RelgrabResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content).map_err(|e| {
            RelgrabError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Environment values win over the config file; empty values are ignored
    pub fn apply_env(&mut self, token: Option<String>, api_url: Option<String>) {
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            self.token = Some(token);
        }
        if let Some(api_url) = api_url.filter(|u| !u.is_empty()) {
            self.api_url = api_url;
        }
    }

    /// API base URL without a trailing slash
    pub fn api_base(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    /// Destination directory for downloads; empty means the current directory
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir.clone().unwrap_or_default()
    }
}
