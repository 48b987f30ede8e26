use thiserror::Error;

pub type RelgrabResult<T> = Result<T, RelgrabError>;

#[derive(Error, Debug)]
pub enum RelgrabError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The request never produced a usable response (connect, TLS, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error status and no decodable API error.
    /// Carries the status line, e.g. `404 Not Found`.
    #[error("{0}")]
    Transport(String),

    /// An error reported by the forge API in its JSON response body.
    #[error("{message}")]
    ForgeApi {
        message: String,
        documentation_url: Option<String>,
    },

    #[error("No releases found for {0}")]
    NoReleases(String),

    #[error("Release with tag '{tag}' not found")]
    TagNotFound { tag: String },

    #[error("Release {tag} has no assets")]
    NoAssets { tag: String },

    #[error("Asset '{name}' not found in release {tag}")]
    AssetNotFound { tag: String, name: String },

    #[error("Size of downloaded asset {name} does not match: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        name: String,
        expected: u64,
        actual: u64,
    },

    #[error("Invalid repository '{0}', expected owner/name")]
    InvalidRepository(String),

    #[error("Path error: {0}")]
    Path(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RelgrabError {
    /// True for failures that happened below the API layer: the network
    /// itself or a bare error status.
    pub fn is_transport(&self) -> bool {
        matches!(self, RelgrabError::Http(_) | RelgrabError::Transport(_))
    }
}
