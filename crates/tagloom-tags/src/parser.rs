//! Tag parsing and slug normalization.
//!
//! Parsing is total: every string maps to exactly one [`Category`].
//!
//! ```
//! use tagloom_tags::{parse_tag, Category};
//!
//! let parsed = parse_tag("artist:Karl Bryullov");
//! assert_eq!(parsed.category, Category::Artist);
//! assert_eq!(parsed.value, "Karl Bryullov");
//! assert_eq!(parsed.slug, "karl-bryullov");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::category::{Category, CategoryMap};

/// A raw tag split into category, display value, and slug.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTag {
    /// Category selected by the prefix.
    pub category: Category,
    /// Display value: prefix removed and trimmed.
    pub value: String,
    /// URL-safe identifier derived from `value`.
    pub slug: String,
    /// The untouched input.
    pub original: String,
}

/// Parse a raw tag string.
///
/// Leading whitespace before a prefix is ignored and the prefix is matched
/// case-insensitively. Unprefixed input keeps its raw text as the value.
pub fn parse_tag(raw: &str) -> ParsedTag {
    let candidate = raw.trim_start();

    for category in Category::PREFIXED {
        let Some(prefix) = category.prefix() else {
            continue;
        };
        let head_matches = candidate
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix));
        if head_matches {
            let value = candidate[prefix.len()..].trim().to_string();
            return ParsedTag {
                category,
                slug: slugify(&value),
                value,
                original: raw.to_string(),
            };
        }
    }

    ParsedTag {
        category: Category::Tag,
        value: raw.to_string(),
        slug: slugify(raw),
        original: raw.to_string(),
    }
}

/// Normalize text into a lowercase, hyphenated, URL-safe slug.
///
/// Latin diacritics are stripped (`Café` → `cafe`) while letters of other
/// scripts keep their composed form (`й` stays `й`). Every run of
/// non-alphanumeric characters becomes one hyphen, and hyphens are trimmed
/// from both ends. Text with no letters or digits at all (`★`, `🎨`) falls
/// back to the hex code points of its non-whitespace characters, so only
/// blank text yields an empty slug. `slugify(slugify(x)) == slugify(x)`.
pub fn slugify(text: &str) -> String {
    let lowered: String = text.to_lowercase().nfc().collect();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_hyphen = false;

    for ch in lowered.chars() {
        if is_combining_mark(ch) {
            // Marks that did not compose stay only on non-Latin letters.
            if !pending_hyphen && slug.chars().last().is_some_and(|c| !c.is_ascii()) {
                slug.push(ch);
            }
            continue;
        }
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ascii_base(ch).unwrap_or(ch));
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        return code_point_slug(text);
    }
    slug
}

/// The ASCII letter under a Latin letter with diacritics, if that is all it is.
fn ascii_base(ch: char) -> Option<char> {
    let mut parts = std::iter::once(ch).nfd();
    let base = parts.next()?;
    (base.is_ascii() && parts.all(is_combining_mark)).then_some(base)
}

fn code_point_slug(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| format!("u{:x}", u32::from(c)))
        .collect::<Vec<_>>()
        .join("-")
}

/// Listing URL for a raw tag, e.g. `/artists/karl-bryullov`.
pub fn tag_url(raw: &str) -> String {
    let parsed = parse_tag(raw);
    format!("{}/{}", parsed.category.route(), parsed.slug)
}

/// Display value for a raw tag (prefix removed).
pub fn display_value(raw: &str) -> String {
    parse_tag(raw).value
}

/// Group raw tags by category, keeping input order within each group.
pub fn group_by_category<I, S>(tags: I) -> CategoryMap<Vec<ParsedTag>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut grouped: CategoryMap<Vec<ParsedTag>> = CategoryMap::default();
    for tag in tags {
        let parsed = parse_tag(tag.as_ref());
        grouped.get_mut(parsed.category).push(parsed);
    }
    grouped
}

/// Re-bucket a `raw tag → count` map by category and slug.
///
/// When several raw tags share a category and slug, the last one visited
/// (in key order) sets the count.
pub fn categorize_counts(
    tag_counts: &BTreeMap<String, usize>,
) -> CategoryMap<BTreeMap<String, usize>> {
    let mut categorized: CategoryMap<BTreeMap<String, usize>> = CategoryMap::default();
    for (tag, &count) in tag_counts {
        let parsed = parse_tag(tag);
        categorized.get_mut(parsed.category).insert(parsed.slug, count);
    }
    categorized
}
