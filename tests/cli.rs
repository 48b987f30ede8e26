//! End-to-end tests for the `relgrab` binary against a mock API server

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// `relgrab` isolated from the user's config, token and working directory
fn relgrab(server: &MockServer, home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("relgrab").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("RELGRAB_API_URL", server.uri())
        .env_remove("GITHUB_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

async fn mount_widget_releases(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/repos/acme/widget/releases"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "tag_name": "v2.0.0",
                "published_at": "2024-03-01T12:00:00Z",
                "assets": [{
                    "url": format!("{}/repos/acme/widget/releases/assets/2", server.uri()),
                    "name": "widget-2.0.0.tar.gz",
                    "size": 6,
                    "browser_download_url": "https://example.invalid/widget-2.0.0.tar.gz"
                }]
            },
            {
                "tag_name": "v1.0.0",
                "assets": [{
                    "url": format!("{}/repos/acme/widget/releases/assets/1", server.uri()),
                    "name": "widget-1.0.0.tar.gz",
                    "size": 3,
                    "browser_download_url": "https://example.invalid/widget-1.0.0.tar.gz"
                }]
            }
        ])))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_downloads_latest_asset_through_redirect() {
    let server = MockServer::start().await;
    mount_widget_releases(&server).await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widget/releases/assets/2"))
        .and(header("accept", "application/octet-stream"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("location", format!("{}/blobs/widget-2", server.uri())),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/blobs/widget-2"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"v2-bin".to_vec()))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    relgrab(&server, &home)
        .args(["acme/widget", "--dir", "downloads/bin"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Downloaded widget-2.0.0.tar.gz (6 bytes) from v2.0.0",
        ));

    let file = home.path().join("downloads/bin/widget-2.0.0.tar.gz");
    assert_eq!(std::fs::read(file).unwrap(), b"v2-bin");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_downloads_tagged_release_with_token() {
    let server = MockServer::start().await;
    mount_widget_releases(&server).await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/widget/releases/assets/1"))
        .and(header("authorization", "token s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"v1!".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    relgrab(&server, &home)
        .args(["acme/widget", "--tag", "v1.0.0", "--token", "s3cret"])
        .assert()
        .success();

    assert_eq!(
        std::fs::read(home.path().join("widget-1.0.0.tar.gz")).unwrap(),
        b"v1!"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unknown_tag_fails() {
    let server = MockServer::start().await;
    mount_widget_releases(&server).await;

    let home = TempDir::new().unwrap();
    relgrab(&server, &home)
        .args(["acme/widget", "--tag", "v9.9.9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Release with tag 'v9.9.9' not found"))
        .stderr(predicate::str::contains("--list"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_bad_credentials_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos/acme/private/releases"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "Bad credentials",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&server)
        .await;

    let home = TempDir::new().unwrap();
    relgrab(&server, &home)
        .args(["acme/private", "--token", "expired"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Bad credentials"))
        .stderr(predicate::str::contains("https://docs.github.com/rest"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_prints_tags() {
    let server = MockServer::start().await;
    mount_widget_releases(&server).await;

    let home = TempDir::new().unwrap();
    relgrab(&server, &home)
        .args(["acme/widget", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("v2.0.0  2024-03-01"))
        .stdout(predicate::str::contains("widget-1.0.0.tar.gz (3 bytes)"));

    assert!(!home.path().join("widget-2.0.0.tar.gz").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_repository_argument() {
    let server = MockServer::start().await;

    let home = TempDir::new().unwrap();
    relgrab(&server, &home)
        .arg("not-a-repo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected owner/name"));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[test]
fn test_missing_repository_is_usage_error() {
    Command::cargo_bin("relgrab")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_with_unknown_tag_fails() {
    let server = MockServer::start().await;
    mount_widget_releases(&server).await;

    let home = TempDir::new().unwrap();
    relgrab(&server, &home)
        .args(["acme/widget", "--list", "--tag", "v9.9.9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Release with tag 'v9.9.9' not found"));
}
