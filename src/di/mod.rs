//! Dependency injection infrastructure for relgrab
//!
//! The download workflow talks to the forge through the [`ForgeProvider`]
//! trait so it can run against the real API or an in-memory mock.
//!
//! # Example (Production)
//! ```no_run
//! use relgrab::config::Config;
//! use relgrab::github::GitHubClient;
//!
//! # fn example() -> relgrab::core::RelgrabResult<()> {
//! let client = GitHubClient::new(&Config::load()?)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Example (Testing)
//! ```
//! use relgrab::di::{mocks::MockForgeProvider, ForgeProvider};
//! use std::sync::Arc;
//!
//! let forge: Arc<dyn ForgeProvider> = Arc::new(MockForgeProvider::new());
//! ```

pub mod mocks;
pub mod traits;

// Re-export key types
pub use traits::ForgeProvider;
