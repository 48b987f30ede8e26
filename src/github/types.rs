//! GitHub API type definitions

use crate::core::RelgrabError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Repository identifier in `owner/name` form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// `owner/name` with each segment percent-encoded, for use in API paths
    pub fn url_path(&self) -> String {
        format!(
            "{}/{}",
            urlencoding::encode(&self.owner),
            urlencoding::encode(&self.name)
        )
    }
}

impl FromStr for RepoId {
    type Err = RelgrabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(RelgrabError::InvalidRepository(s.to_string())),
        }
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// GitHub release information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    /// Canonical API URL of the release
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub assets_url: String,
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<Asset>,
    /// Source archive. Null for draft releases.
    #[serde(default)]
    pub zipball_url: Option<String>,
    #[serde(default)]
    pub tarball_url: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// GitHub release asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// API URL. Requesting it with `Accept: application/octet-stream`
    /// redirects to the binary, unlike `browser_download_url` which needs no
    /// API access but does not work for private repositories.
    pub url: String,
    pub name: String,
    pub size: u64,
    #[serde(default)]
    pub browser_download_url: String,
    #[serde(default)]
    pub content_type: Option<String>,
}

/// Error body returned by the API alongside an error status
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForgeErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub documentation_url: Option<String>,
}

impl From<ForgeErrorBody> for RelgrabError {
    fn from(body: ForgeErrorBody) -> Self {
        RelgrabError::ForgeApi {
            message: body.message,
            documentation_url: body.documentation_url,
        }
    }
}

/// An asset written to local storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedAsset {
    pub path: PathBuf,
    pub bytes_written: u64,
}
