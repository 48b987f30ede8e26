//! Trait definitions for dependency injection

use crate::core::RelgrabResult;
use crate::github::types::{Asset, DownloadedAsset, Release, RepoId};
use async_trait::async_trait;
use std::path::Path;

/// Trait for forge API operations
///
/// Provides the two calls the download workflow needs: listing releases and
/// fetching one asset to disk. Implementations should be thread-safe
/// (Send + Sync).
#[async_trait]
pub trait ForgeProvider: Send + Sync {
    /// List the releases of a repository, newest first
    async fn list_releases(&self, repo: &RepoId) -> RelgrabResult<Vec<Release>>;

    /// Write the asset's bytes to `dir/asset.name`
    async fn fetch_asset(&self, asset: &Asset, dir: &Path) -> RelgrabResult<DownloadedAsset>;
}
