//! Mock implementations of service traits for testing

use super::traits::ForgeProvider;
use crate::core::path::asset_destination;
use crate::core::{RelgrabError, RelgrabResult};
use crate::github::types::{Asset, DownloadedAsset, Release, RepoId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// In-memory forge for testing
///
/// # Example
///
/// ```
/// use relgrab::di::mocks::MockForgeProvider;
/// use relgrab::github::RepoId;
///
/// let forge = MockForgeProvider::new();
/// forge.add_releases(&RepoId::new("acme", "widget"), Vec::new());
/// assert!(forge.fetched_assets().is_empty());
/// ```
#[derive(Clone, Default)]
pub struct MockForgeProvider {
    releases: Arc<Mutex<HashMap<String, Vec<Release>>>>,
    asset_bodies: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    fetched: Arc<Mutex<Vec<String>>>,
}

impl MockForgeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the release list returned for `repo`
    pub fn add_releases(&self, repo: &RepoId, releases: Vec<Release>) {
        self.releases
            .lock()
            .unwrap()
            .insert(repo.to_string(), releases);
    }

    /// Register the bytes served for an asset API URL
    pub fn add_asset_body(&self, asset_url: &str, body: Vec<u8>) {
        self.asset_bodies
            .lock()
            .unwrap()
            .insert(asset_url.to_string(), body);
    }

    /// Asset URLs requested so far, in order
    pub fn fetched_assets(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl ForgeProvider for MockForgeProvider {
    async fn list_releases(&self, repo: &RepoId) -> RelgrabResult<Vec<Release>> {
        self.releases
            .lock()
            .unwrap()
            .get(&repo.to_string())
            .cloned()
            .ok_or_else(|| RelgrabError::Transport("404 Not Found".to_string()))
    }

    async fn fetch_asset(&self, asset: &Asset, dir: &Path) -> RelgrabResult<DownloadedAsset> {
        let path = asset_destination(dir, &asset.name)?;
        self.fetched.lock().unwrap().push(asset.url.clone());

        let body = self
            .asset_bodies
            .lock()
            .unwrap()
            .get(&asset.url)
            .cloned()
            .ok_or_else(|| RelgrabError::Transport("404 Not Found".to_string()))?;

        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&path, &body)?;

        Ok(DownloadedAsset {
            path,
            bytes_written: body.len() as u64,
        })
    }
}
