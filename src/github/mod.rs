//! GitHub release retrieval
//!
//! This module provides functionality for:
//! - Listing the releases of a repository
//! - Selecting a release by tag, or the newest one
//! - Downloading a release asset through the API (redirect to the binary)

pub mod client;
pub mod selector;
pub mod types;

pub use client::GitHubClient;
pub use selector::{resolve, select_asset};
pub use types::{Asset, DownloadedAsset, ForgeErrorBody, Release, RepoId};
