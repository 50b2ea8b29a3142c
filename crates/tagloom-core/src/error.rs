//! Error types for Tagloom operations.
//!
//! A single `Error` enum and `Result<T>` alias are shared by every crate in
//! the workspace. Variants are built with `thiserror`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur in Tagloom operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error, optionally tied to the path that caused it.
    #[error("I/O error{}: {source}", fmt_path(.path))]
    Io {
        /// Underlying I/O error.
        source: std::io::Error,
        /// Path involved, when known.
        path: Option<PathBuf>,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Content not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid data or format.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Failed to parse input (frontmatter, dates, artifacts).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

fn fmt_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" at {}", p.display()),
        None => String::new(),
    }
}

impl Error {
    /// Wrap an I/O error without path context.
    pub fn io(source: std::io::Error) -> Self {
        Self::Io { source, path: None }
    }

    /// Wrap an I/O error with the path that triggered it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::Io {
            source,
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid data error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Returns `true` for the I/O variant.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::io(source)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias using Tagloom's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_without_path() {
        let err = Error::io(std::io::Error::other("boom"));
        assert!(err.is_io());
        assert_eq!(err.to_string(), "I/O error: boom");
    }

    #[test]
    fn test_io_error_with_path() {
        let err = Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            "/tmp/tag-data.json",
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/tag-data.json"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_constructors() {
        assert!(matches!(Error::config("x"), Error::Config(_)));
        assert!(matches!(Error::not_found("x"), Error::NotFound(_)));
        assert!(matches!(Error::invalid_data("x"), Error::InvalidData(_)));
        assert!(matches!(Error::parse("x"), Error::Parse(_)));
    }

    #[test]
    fn test_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_from_io() {
        let err: Error = std::io::Error::other("disk").into();
        assert!(err.is_io());
    }
}
