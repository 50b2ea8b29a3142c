//! Frontmatter extraction.
//!
//! A document starts with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: The Last Day of Pompeii
//! date: 2024-01-15
//! tags: ['artist:Karl Bryullov', 'movement:Romanticism']
//! ---
//! Body text...
//! ```

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tagloom_core::{Error, Result};

use crate::item::{parse_date, ContentItem};

static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A\x{feff}?---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*(?:\r?\n|\z)")
        .expect("frontmatter regex is valid")
});

/// Raw frontmatter fields as written by authors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Frontmatter {
    /// Post title (required).
    pub title: Option<String>,
    /// Publication date (required).
    pub date: Option<String>,
    /// Revision date; `lastmod` is accepted as an alias.
    #[serde(alias = "lastmod")]
    pub update: Option<String>,
    /// Draft flag.
    pub draft: Option<bool>,
    /// Raw tag strings.
    pub tags: Option<Vec<String>>,
    /// Summary line.
    pub summary: Option<String>,
    /// One image or a list of images.
    pub images: Option<Images>,
    /// Author identifiers.
    pub authors: Option<Vec<String>>,
    /// Layout name.
    pub layout: Option<String>,
}

/// `images` may be a single string or a list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Images {
    /// A single image path.
    One(String),
    /// Several image paths.
    Many(Vec<String>),
}

impl Images {
    fn into_vec(self) -> Vec<String> {
        match self {
            Images::One(s) => vec![s],
            Images::Many(v) => v,
        }
    }
}

/// Split a document into `(frontmatter, body)`.
///
/// Returns `None` when the document has no leading frontmatter block.
pub fn split_frontmatter(text: &str) -> Option<(&str, &str)> {
    let caps = FRONTMATTER_RE.captures(text)?;
    let whole = caps.get(0)?;
    let yaml = caps.get(1).map_or("", |m| m.as_str());
    Some((yaml, &text[whole.end()..]))
}

/// Parse a document into a [`ContentItem`].
///
/// `relative_path` is the path below the content root; it provides the
/// item's `path` and `slug`. Returns `Ok(None)` when the document has no
/// frontmatter block.
pub fn parse_item(relative_path: &Path, text: &str) -> Result<Option<ContentItem>> {
    let Some((yaml, _body)) = split_frontmatter(text) else {
        return Ok(None);
    };

    let location = relative_path.display();
    let fm: Frontmatter = if yaml.trim().is_empty() {
        Frontmatter::default()
    } else {
        yaml_serde::from_str(yaml)
            .map_err(|e| Error::parse(format!("{location}: invalid frontmatter: {e}")))?
    };

    let title = fm
        .title
        .ok_or_else(|| Error::invalid_data(format!("{location}: missing required field 'title'")))?;
    let date_raw = fm
        .date
        .ok_or_else(|| Error::invalid_data(format!("{location}: missing required field 'date'")))?;
    let date = parse_date(&date_raw).map_err(|e| Error::parse(format!("{location}: {e}")))?;
    let update = fm
        .update
        .as_deref()
        .map(parse_date)
        .transpose()
        .map_err(|e| Error::parse(format!("{location}: {e}")))?;

    let mut item = ContentItem::new(title, date).with_path(flattened_path(relative_path));
    item.update = update;
    item.draft = fm.draft;
    item.tags = fm.tags.unwrap_or_default();
    item.summary = fm.summary;
    item.images = fm.images.map(Images::into_vec).unwrap_or_default();
    item.authors = fm.authors.unwrap_or_default();
    item.layout = fm.layout;

    Ok(Some(item))
}

/// Relative path with `/` separators, no extension, and no trailing `index`.
fn flattened_path(relative_path: &Path) -> String {
    let without_ext = relative_path.with_extension("");
    let mut parts: Vec<String> = without_ext
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.len() > 1 && parts.last().is_some_and(|p| p == "index") {
        parts.pop();
    }
    parts.join("/")
}
