//! File utilities for content discovery and artifact output.
//!
//! Discovery is async (tokio + `async-walkdir`). Artifact writes are
//! synchronous and atomic: data goes to a temp file in the destination
//! directory which is then persisted over the target, so readers never
//! observe a half-written artifact.

use async_walkdir::WalkDir;
use futures::StreamExt;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tokio::fs;

use crate::{Error, Result};

/// Options for discovering content files.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// Accepted file extensions (without dot). Empty accepts any.
    pub extensions: Vec<&'static str>,
    /// Glob applied to the path relative to the search base.
    pub pattern: Option<String>,
}

impl FindOptions {
    /// Options matching Markdown and MDX documents.
    pub fn markdown() -> Self {
        Self {
            extensions: vec!["md", "mdx"],
            pattern: None,
        }
    }

    /// Restrict matches to a glob on the relative path, e.g. `blog/**/*.mdx`.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    fn compiled_pattern(&self) -> Result<Option<glob::Pattern>> {
        self.pattern
            .as_deref()
            .map(|p| {
                glob::Pattern::new(p)
                    .map_err(|e| Error::config(format!("Invalid content pattern '{p}': {e}")))
            })
            .transpose()
    }

    fn accepts_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.contains(&ext))
    }
}

/// Information about a discovered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Full path to the file.
    pub path: PathBuf,
    /// Path relative to the search base.
    pub relative_path: PathBuf,
}

/// Find all files matching `options` under `base_path`.
///
/// Results are sorted by relative path so downstream processing sees a
/// stable order across runs and platforms.
pub async fn find_all_files(base_path: &Path, options: FindOptions) -> Result<Vec<FileInfo>> {
    let pattern = options.compiled_pattern()?;
    let match_opts = glob::MatchOptions {
        require_literal_separator: true,
        ..Default::default()
    };

    let mut files = Vec::new();
    let mut walker = WalkDir::new(base_path);

    while let Some(entry_result) = walker.next().await {
        let entry = entry_result
            .map_err(|e| Error::io_with_path(std::io::Error::other(e), base_path))?;
        let path = entry.path();

        if path.is_dir() {
            continue;
        }

        let relative_path = path.strip_prefix(base_path).unwrap_or(&path).to_path_buf();

        if !options.accepts_extension(&path) {
            continue;
        }

        if let Some(ref pattern) = pattern {
            if !pattern.matches_path_with(&relative_path, match_opts) {
                continue;
            }
        }

        files.push(FileInfo {
            path: path.clone(),
            relative_path,
        });
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    log::debug!("Found {} file(s) under {}", files.len(), base_path.display());
    Ok(files)
}

/// Read a file's contents as a string.
pub async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

/// Check if a path exists.
pub async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

/// Atomically replace `path` with `bytes`.
///
/// The parent directory is created if missing.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    write_all_atomic(&[(path, bytes)])
}

/// Atomically replace several files as one unit.
///
/// Every file is staged in a temp file beside its destination and every
/// destination is checked before the first one is replaced. A failure while
/// staging leaves all destinations untouched.
pub fn write_all_atomic<P, B>(files: &[(P, B)]) -> Result<()>
where
    P: AsRef<Path>,
    B: AsRef<[u8]>,
{
    let mut staged = Vec::with_capacity(files.len());
    for (path, bytes) in files {
        let path = path.as_ref();
        staged.push((stage(path, bytes.as_ref())?, path));
    }

    for (tmp, path) in staged {
        tmp.persist(path)
            .map_err(|e| Error::io_with_path(e.error, path))?;
    }

    log::debug!("Replaced {} file(s)", files.len());
    Ok(())
}

fn stage(path: &Path, bytes: &[u8]) -> Result<NamedTempFile> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    std::fs::create_dir_all(&parent).map_err(|e| Error::io_with_path(e, &parent))?;

    if path.is_dir() {
        return Err(Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::IsADirectory, "destination is a directory"),
            path,
        ));
    }

    let mut tmp = NamedTempFile::new_in(&parent).map_err(|e| Error::io_with_path(e, &parent))?;
    let tmp_path = tmp.path().to_path_buf();
    tmp.write_all(bytes)
        .map_err(|e| Error::io_with_path(e, &tmp_path))?;
    tmp.flush().map_err(|e| Error::io_with_path(e, &tmp_path))?;
    Ok(tmp)
}
