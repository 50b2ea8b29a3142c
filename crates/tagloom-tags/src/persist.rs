//! Tag artifact persistence.
//!
//! Two JSON documents are produced per build:
//!
//! - the flat count, `{slug: count}`
//! - the categorized document, `{"counts": {...}, "displayValues": {...}}`
//!
//! Both files are serialized and staged before either is replaced, so a
//! failed build leaves the previous pair in place rather than a new flat
//! count beside an old categorized document.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tagloom_core::{write_all_atomic, Error, Result};

use crate::aggregate::{DisplayValues, TagAggregation, TagCounts};
use crate::category::CategoryMap;

/// Default file name of the flat count artifact.
pub const FLAT_FILE: &str = "tag-data.json";

/// Default file name of the categorized artifact.
pub const CATEGORIZED_FILE: &str = "tag-data-categorized.json";

/// The categorized tag artifact.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategorizedTagDocument {
    /// Slug counts per category.
    pub counts: CategoryMap<TagCounts>,
    /// Display values per category.
    pub display_values: CategoryMap<DisplayValues>,
}

impl From<&TagAggregation> for CategorizedTagDocument {
    fn from(agg: &TagAggregation) -> Self {
        Self {
            counts: agg.categorized.clone(),
            display_values: agg.display_values.clone(),
        }
    }
}

/// Where the two artifacts live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Flat count file.
    pub flat: PathBuf,
    /// Categorized document file.
    pub categorized: PathBuf,
}

impl ArtifactPaths {
    /// Default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::with_names(dir, FLAT_FILE, CATEGORIZED_FILE)
    }

    /// Custom file names inside `dir`.
    pub fn with_names(dir: impl AsRef<Path>, flat: &str, categorized: &str) -> Self {
        let dir = dir.as_ref();
        Self {
            flat: dir.join(flat),
            categorized: dir.join(categorized),
        }
    }
}

/// Write both artifacts for `agg`, replacing any previous run.
pub fn save_artifacts(agg: &TagAggregation, paths: &ArtifactPaths) -> Result<()> {
    let flat = serde_json::to_vec(&agg.flat)?;
    let categorized = serde_json::to_vec(&CategorizedTagDocument::from(agg))?;
    write_all_atomic(&[(&paths.flat, &flat), (&paths.categorized, &categorized)])?;

    log::info!(
        "Wrote tag artifacts: {} ({} tags), {}",
        paths.flat.display(),
        agg.flat.len(),
        paths.categorized.display()
    );
    Ok(())
}

/// Load the flat count artifact; `Ok(None)` when the file does not exist.
pub fn load_flat(path: impl AsRef<Path>) -> Result<Option<TagCounts>> {
    let Some(json) = read_optional(path.as_ref())? else {
        return Ok(None);
    };
    serde_json::from_str(&json)
        .map(Some)
        .map_err(|e| Error::parse(format!("{}: {e}", path.as_ref().display())))
}

/// Load the categorized artifact; `Ok(None)` when the file does not exist.
///
/// Consumers that render before the first build can fall back to
/// `CategorizedTagDocument::default()`.
pub fn load_categorized(path: impl AsRef<Path>) -> Result<Option<CategorizedTagDocument>> {
    let Some(json) = read_optional(path.as_ref())? else {
        return Ok(None);
    };
    load_categorized_from_str(&json)
        .map(Some)
        .map_err(|e| Error::parse(format!("{}: {e}", path.as_ref().display())))
}

/// Parse a categorized document from JSON text.
pub fn load_categorized_from_str(json: &str) -> Result<CategorizedTagDocument> {
    serde_json::from_str(json)
        .map_err(|e| Error::parse(format!("Failed to parse categorized tag JSON: {e}")))
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io_with_path(e, path)),
    }
}
