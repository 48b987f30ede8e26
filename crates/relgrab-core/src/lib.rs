//! Core utilities shared by the relgrab library and binary: the error
//! taxonomy, user-facing error rendering and platform paths.

pub mod core;

pub use crate::core::error::{RelgrabError, RelgrabResult};
pub use crate::core::error_help::{format_error_with_help, ErrorHelp};
