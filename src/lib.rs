//! relgrab: download a release asset from a GitHub repository
//!
//! This crate provides the library behind the `relgrab` binary, re-exporting
//! core functionality from `relgrab-core` and organizing the API client
//! and release selection.

pub use relgrab_core::{format_error_with_help, ErrorHelp, RelgrabError, RelgrabResult};

/// Core module re-exported from relgrab-core.
pub mod core {
    pub use relgrab_core::core::*;
}

/// Configuration management.
pub mod config;

/// GitHub integration: releases API client and release selection.
pub mod github;

/// Dependency injection infrastructure.
pub mod di;
