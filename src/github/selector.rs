//! Release and asset selection over an already-fetched release list.
//!
//! The API returns releases newest first, so "latest" is simply the first
//! element. No date comparison is done here.

use crate::core::{RelgrabError, RelgrabResult};
use crate::github::types::{Asset, Release};

/// Tag value that selects the newest release
pub const LATEST: &str = "latest";

/// Pick the release with the given tag, or the newest one when `tag` is
/// absent, empty or `"latest"`.
///
/// `repo` is only used to describe the failure when the list is empty.
pub fn resolve<'a>(
    releases: &'a [Release],
    tag: Option<&str>,
    repo: &str,
) -> RelgrabResult<&'a Release> {
    let first = releases
        .first()
        .ok_or_else(|| RelgrabError::NoReleases(repo.to_string()))?;

    match tag {
        None | Some("") | Some(LATEST) => Ok(first),
        Some(tag) => releases
            .iter()
            .find(|r| r.tag_name == tag)
            .ok_or_else(|| RelgrabError::TagNotFound {
                tag: tag.to_string(),
            }),
    }
}

/// Pick the asset with the given file name, or the first asset when no name
/// is given.
pub fn select_asset<'a>(release: &'a Release, name: Option<&str>) -> RelgrabResult<&'a Asset> {
    let first = release.assets.first().ok_or_else(|| RelgrabError::NoAssets {
        tag: release.tag_name.clone(),
    })?;

    match name {
        None | Some("") => Ok(first),
        Some(name) => release
            .assets
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| RelgrabError::AssetNotFound {
                tag: release.tag_name.clone(),
                name: name.to_string(),
            }),
    }
}
