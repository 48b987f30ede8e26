use relgrab::core::{RelgrabError, RelgrabResult};
use relgrab::di::ForgeProvider;
use relgrab::github::{resolve, select_asset, DownloadedAsset, Release, RepoId};
use std::path::PathBuf;

/// Options for a single download run
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    pub repo: String,
    pub tag: Option<String>,
    pub asset: Option<String>,
    pub dir: PathBuf,
    pub list: bool,
}

/// What a run ended with
#[derive(Debug)]
pub enum FetchOutcome {
    Listed(usize),
    Downloaded(DownloadedAsset),
}

pub async fn run(forge: &dyn ForgeProvider, options: FetchOptions) -> RelgrabResult<FetchOutcome> {
    let repo: RepoId = options.repo.parse()?;
    tracing::debug!(%repo, "loading releases");

    let releases = forge.list_releases(&repo).await?;
    tracing::debug!(count = releases.len(), "releases found");

    let release = resolve(&releases, options.tag.as_deref(), &repo.to_string())?;
    tracing::debug!(tag = %release.tag_name, "release selected");

    if options.list {
        for release in &releases {
            println!("{}", describe_release(release));
        }
        return Ok(FetchOutcome::Listed(releases.len()));
    }

    let asset = select_asset(release, options.asset.as_deref())?;
    tracing::debug!(url = %asset.url, name = %asset.name, size = asset.size, "asset selected");

    let downloaded = forge.fetch_asset(asset, &options.dir).await?;
    if downloaded.bytes_written != asset.size {
        tracing::warn!(
            expected = asset.size,
            actual = downloaded.bytes_written,
            "downloaded size differs from declared size"
        );
        return Err(RelgrabError::SizeMismatch {
            name: asset.name.clone(),
            expected: asset.size,
            actual: downloaded.bytes_written,
        });
    }

    println!(
        "✓ Downloaded {} ({} bytes) from {}",
        asset.name, asset.size, release.tag_name
    );
    println!("  Saved to: {}", downloaded.path.display());

    Ok(FetchOutcome::Downloaded(downloaded))
}

/// One line of `--list` output: tag, optional date and flags, asset names
fn describe_release(release: &Release) -> String {
    let mut line = release.tag_name.clone();

    if let Some(published) = release.published_at {
        line.push_str(&format!("  {}", published.format("%Y-%m-%d")));
    }
    if release.draft {
        line.push_str("  [draft]");
    }
    if release.prerelease {
        line.push_str("  [pre-release]");
    }

    if release.assets.is_empty() {
        line.push_str("\n    (no assets)");
    }
    for asset in &release.assets {
        line.push_str(&format!("\n    {} ({} bytes)", asset.name, asset.size));
    }

    line
}
