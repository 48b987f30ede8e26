//! User-facing rendering of errors with actionable suggestions.

use crate::core::error::RelgrabError;

/// Suggestions attached to an error when it is shown to a user.
pub trait ErrorHelp {
    /// Lines of advice for the user, most relevant first.
    fn help(&self) -> Vec<String>;
}

impl ErrorHelp for RelgrabError {
    fn help(&self) -> Vec<String> {
        match self {
            RelgrabError::ForgeApi {
                message,
                documentation_url,
            } => {
                let mut help = Vec::new();
                if message.eq_ignore_ascii_case("bad credentials") {
                    help.push("Check the access token passed with --token or GITHUB_TOKEN".to_string());
                } else if message.to_lowercase().contains("rate limit") {
                    help.push(
                        "Pass an access token to raise the API rate limit".to_string(),
                    );
                }
                if let Some(url) = documentation_url {
                    help.push(format!("Documentation: {}", url));
                }
                help
            }
            RelgrabError::Transport(status) if status.starts_with("404") => vec![
                "Check that the repository name is spelled as owner/name".to_string(),
                "Private repositories require an access token (--token)".to_string(),
            ],
            RelgrabError::Transport(status) if status.starts_with("401") || status.starts_with("403") => {
                vec!["Check the access token passed with --token or GITHUB_TOKEN".to_string()]
            }
            RelgrabError::Http(_) => {
                vec!["Check your network connection and the configured api_url".to_string()]
            }
            RelgrabError::TagNotFound { .. } => {
                vec!["Run with --list to see the available release tags".to_string()]
            }
            RelgrabError::AssetNotFound { .. } => {
                vec!["Run with --list to see the assets of each release".to_string()]
            }
            RelgrabError::NoReleases(_) => vec![
                "Only published releases are listed; tags without a release are ignored".to_string(),
            ],
            RelgrabError::InvalidRepository(_) => {
                vec!["Example: relgrab acme/widget".to_string()]
            }
            RelgrabError::SizeMismatch { .. } => {
                vec!["The download may have been interrupted; try again".to_string()]
            }
            _ => Vec::new(),
        }
    }
}

/// Format an error with its suggestions for printing to stderr
pub fn format_error_with_help(error: &RelgrabError) -> String {
    let mut out = format!("Error: {}", error);
    for line in error.help() {
        out.push_str("\n  → ");
        out.push_str(&line);
    }
    out
}
