//! GitHub API client implementation

use crate::config::Config;
use crate::core::path::asset_destination;
use crate::core::{RelgrabError, RelgrabResult};
use crate::di::traits::ForgeProvider;
use crate::github::types::{Asset, DownloadedAsset, ForgeErrorBody, Release, RepoId};
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{header, Client as HttpClient, Response};
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWriteExt;

const ACCEPT_JSON: &str = "application/json";
const ACCEPT_OCTET_STREAM: &str = "application/octet-stream";

/// GitHub API client
pub struct GitHubClient {
    http_client: HttpClient,
    api_url: String,
    show_progress: bool,
}

impl GitHubClient {
    /// Create a new GitHub client
    pub fn new(config: &Config) -> RelgrabResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent)
                .map_err(|e| RelgrabError::Config(format!("Invalid user agent: {}", e)))?,
        );

        if let Some(ref token) = config.token {
            let mut value = header::HeaderValue::from_str(&format!("token {}", token))
                .map_err(|e| RelgrabError::Config(format!("Invalid GitHub token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        // The default redirect policy is what makes asset downloads work: the
        // asset URL answers with a 302 to the storage backend, and reqwest
        // drops the Authorization header when that hop changes host.
        let mut builder = HttpClient::builder().default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let http_client = builder
            .build()
            .map_err(|e| RelgrabError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_url: config.api_base().to_string(),
            show_progress: config.show_progress,
        })
    }

    /// List the releases of a repository, newest first.
    ///
    /// Only the first page the API returns is read.
    pub async fn list_releases(&self, repo: &RepoId) -> RelgrabResult<Vec<Release>> {
        let url = format!("{}/repos/{}/releases", self.api_url, repo.url_path());
        tracing::debug!(%url, "listing releases");

        let response = self.get(&url, ACCEPT_JSON).await?;
        let body = response.bytes().await?;
        let releases: Vec<Release> = serde_json::from_slice(&body)?;

        tracing::debug!(count = releases.len(), %repo, "releases loaded");
        Ok(releases)
    }

    /// Download an asset into `dir` (created if missing; empty means the
    /// current directory).
    ///
    /// A failure mid-stream leaves the partial file in place.
    pub async fn fetch_asset(&self, asset: &Asset, dir: &Path) -> RelgrabResult<DownloadedAsset> {
        let path = asset_destination(dir, &asset.name)?;
        tracing::debug!(url = %asset.url, name = %asset.name, size = asset.size, "fetching asset");

        let mut response = self.get(&asset.url, ACCEPT_OCTET_STREAM).await?;
        tracing::debug!(final_url = %response.url(), "asset response received");

        if !dir.as_os_str().is_empty() {
            tokio::fs::create_dir_all(dir).await?;
        }

        let progress = self.progress_bar(response.content_length().unwrap_or(asset.size));
        let mut file = tokio::fs::File::create(&path).await?;
        let mut bytes_written = 0u64;

        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
            bytes_written += chunk.len() as u64;
            progress.set_position(bytes_written);
        }
        file.flush().await?;
        progress.finish_and_clear();

        tracing::info!(path = %path.display(), bytes = bytes_written, "asset written");
        Ok(DownloadedAsset {
            path,
            bytes_written,
        })
    }

    /// Issue a GET and turn error statuses into errors.
    async fn get(&self, url: &str, accept: &'static str) -> RelgrabResult<Response> {
        let response = self
            .http_client
            .get(url)
            .header(header::ACCEPT, accept)
            .send()
            .await?;

        check_status(response).await
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let bar = ProgressBar::new(len);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40.cyan/blue} {bytes}/{total_bytes} ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    }
}

/// Pass successful responses through; map status >= 400 to an error.
///
/// The body is only decoded as an API error when the server says it is JSON.
/// Anything else, including JSON without a message, becomes a transport error
/// carrying the status line.
async fn check_status(response: Response) -> RelgrabResult<Response> {
    let status = response.status();
    if status.as_u16() < 400 {
        return Ok(response);
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains(ACCEPT_JSON))
        .unwrap_or(false);

    if is_json {
        if let Ok(body) = response.bytes().await {
            if let Ok(api_error) = serde_json::from_slice::<ForgeErrorBody>(&body) {
                if !api_error.message.is_empty() {
                    tracing::debug!(%status, message = %api_error.message, "API reported error");
                    return Err(api_error.into());
                }
            }
        }
    }

    tracing::debug!(%status, "request failed");
    Err(RelgrabError::Transport(status.to_string()))
}

#[async_trait]
impl ForgeProvider for GitHubClient {
    async fn list_releases(&self, repo: &RepoId) -> RelgrabResult<Vec<Release>> {
        Self::list_releases(self, repo).await
    }

    async fn fetch_asset(&self, asset: &Asset, dir: &Path) -> RelgrabResult<DownloadedAsset> {
        Self::fetch_asset(self, asset, dir).await
    }
}
