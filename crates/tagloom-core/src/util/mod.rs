//! Utility modules for file operations and path handling.
//!
//! # Modules
//!
//! - [`files`]: Async content discovery and atomic artifact writes
//! - [`paths`]: Tilde expansion and config directory helpers

pub mod files;
pub mod paths;
