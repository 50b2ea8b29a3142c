//! The content item model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tagloom_core::{Error, Result};

/// A single post as seen by tag aggregation and listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Post title.
    pub title: String,
    /// Publication date.
    pub date: DateTime<Utc>,
    /// Last update, when the post has been revised.
    pub update: Option<DateTime<Utc>>,
    /// Draft flag; `None` means not set in frontmatter.
    pub draft: Option<bool>,
    /// Raw tag strings, e.g. `"artist:Karl Bryullov"`.
    pub tags: Vec<String>,
    /// Short summary.
    pub summary: Option<String>,
    /// Image paths, first one is the listing thumbnail.
    pub images: Vec<String>,
    /// Author identifiers.
    pub authors: Vec<String>,
    /// Layout name.
    pub layout: Option<String>,
    /// Relative path without extension, e.g. `blog/the-last-day-of-pompeii`.
    pub path: String,
    /// Path with its first segment removed, e.g. `the-last-day-of-pompeii`.
    pub slug: String,
}

impl ContentItem {
    /// Create an item with the required fields; everything else is empty.
    pub fn new(title: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            date,
            update: None,
            draft: None,
            tags: Vec::new(),
            summary: None,
            images: Vec::new(),
            authors: Vec::new(),
            layout: None,
            path: String::new(),
            slug: String::new(),
        }
    }

    /// Set the raw tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the draft flag.
    pub fn with_draft(mut self, draft: bool) -> Self {
        self.draft = Some(draft);
        self
    }

    /// Set the update date.
    pub fn with_update(mut self, update: DateTime<Utc>) -> Self {
        self.update = Some(update);
        self
    }

    /// Set `path` and derive `slug` from it.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self.slug = slug_from_path(&self.path);
        self
    }

    /// Whether the item is explicitly marked as a draft.
    pub fn is_draft(&self) -> bool {
        self.draft == Some(true)
    }

    /// The date used for "recently updated" ordering.
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.update.unwrap_or(self.date)
    }
}

/// Drop the first path segment: `blog/2024/post` → `2024/post`.
pub(crate) fn slug_from_path(path: &str) -> String {
    match path.split_once('/') {
        Some((_, rest)) => rest.to_string(),
        None => path.to_string(),
    }
}

/// Parse a frontmatter date.
///
/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates (taken as
/// midnight UTC).
pub fn parse_date(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| Error::parse(format!("Unrecognized date '{raw}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date_plain() {
        let dt = parse_date("2024-03-05").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_date_rfc3339_with_offset() {
        let dt = parse_date("2024-03-05T10:30:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 3, 5, 8, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_date_invalid() {
        let err = parse_date("March 5th").unwrap_err();
        assert!(err.to_string().contains("March 5th"));
    }

    #[test]
    fn test_slug_from_path() {
        assert_eq!(slug_from_path("blog/pompeii"), "pompeii");
        assert_eq!(slug_from_path("blog/2024/pompeii"), "2024/pompeii");
        assert_eq!(slug_from_path("standalone"), "standalone");
    }

    #[test]
    fn test_builder_and_flags() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let update = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let item = ContentItem::new("Pompeii", date)
            .with_tags(["artist:Karl Bryullov", "Romanticism"])
            .with_update(update)
            .with_path("blog/pompeii");

        assert_eq!(item.tags.len(), 2);
        assert_eq!(item.slug, "pompeii");
        assert_eq!(item.effective_date(), update);
        assert!(!item.is_draft());
        assert!(item.clone().with_draft(true).is_draft());
        assert!(!item.with_draft(false).is_draft());
    }
}
