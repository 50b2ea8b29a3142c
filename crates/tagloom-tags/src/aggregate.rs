//! Tag aggregation across a content set.
//!
//! [`aggregate`] is a pure batch transform: it walks the items once, in
//! order, and returns every count structure at the end. Persisting the
//! result is the caller's job (see [`crate::persist`]).

use std::collections::BTreeMap;

use serde::Serialize;
use tagloom_content::ContentItem;

use crate::category::CategoryMap;
use crate::parser::parse_tag;

/// Slug → occurrence count.
pub type TagCounts = BTreeMap<String, usize>;

/// Slug → display value.
pub type DisplayValues = BTreeMap<String, String>;

/// Anything that carries raw tags and a draft flag.
pub trait TaggedItem {
    /// Raw tag strings, in authoring order.
    fn raw_tags(&self) -> &[String];

    /// Whether the item is explicitly marked as a draft.
    fn is_draft(&self) -> bool;
}

impl TaggedItem for ContentItem {
    fn raw_tags(&self) -> &[String] {
        &self.tags
    }

    fn is_draft(&self) -> bool {
        ContentItem::is_draft(self)
    }
}

/// Counters describing one aggregation run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    /// Items offered to the aggregator.
    pub items_seen: usize,
    /// Items whose tags were counted.
    pub items_included: usize,
    /// Tagged drafts left out because drafts were excluded.
    pub drafts_skipped: usize,
    /// Items with no tags at all.
    pub untagged: usize,
    /// (item, tag) pairs counted.
    pub tags_counted: usize,
    /// Tags dropped because their value is blank.
    pub empty_skipped: usize,
}

/// Result of [`aggregate`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagAggregation {
    /// Slug counts across all categories.
    pub flat: TagCounts,
    /// Slug counts per category.
    pub categorized: CategoryMap<TagCounts>,
    /// First-seen display value per category and slug.
    pub display_values: CategoryMap<DisplayValues>,
    /// Run counters.
    pub stats: AggregateStats,
}

impl TagAggregation {
    /// Sum of all flat counts.
    pub fn total_occurrences(&self) -> usize {
        self.flat.values().sum()
    }

    /// Number of distinct slugs in the flat count.
    pub fn distinct_tags(&self) -> usize {
        self.flat.len()
    }
}

/// Count tags across `items`.
///
/// An item contributes when it has at least one tag and either
/// `include_drafts` is set or it is not a draft. Each of its tags bumps the
/// flat count and its category count; the first value seen for a
/// category/slug pair becomes the display value. Blank tags (`""`,
/// `"artist:"`) are skipped and tallied in [`AggregateStats::empty_skipped`];
/// every other tag is counted, symbol-only ones included.
pub fn aggregate<T: TaggedItem>(items: &[T], include_drafts: bool) -> TagAggregation {
    let mut result = TagAggregation::default();

    for item in items {
        result.stats.items_seen += 1;

        let tags = item.raw_tags();
        if tags.is_empty() {
            result.stats.untagged += 1;
            continue;
        }
        if !include_drafts && item.is_draft() {
            result.stats.drafts_skipped += 1;
            continue;
        }
        result.stats.items_included += 1;

        for raw in tags {
            let parsed = parse_tag(raw);
            if parsed.value.trim().is_empty() {
                log::warn!("Skipping tag {raw:?}: blank value");
                result.stats.empty_skipped += 1;
                continue;
            }

            *result.flat.entry(parsed.slug.clone()).or_insert(0) += 1;

            let counts = result.categorized.get_mut(parsed.category);
            let first_seen = !counts.contains_key(&parsed.slug);
            *counts.entry(parsed.slug.clone()).or_insert(0) += 1;

            if first_seen {
                result
                    .display_values
                    .get_mut(parsed.category)
                    .insert(parsed.slug, parsed.value);
            }

            result.stats.tags_counted += 1;
        }
    }

    log::debug!(
        "Aggregated {} tag occurrence(s) from {}/{} item(s)",
        result.stats.tags_counted,
        result.stats.items_included,
        result.stats.items_seen
    );
    result
}
