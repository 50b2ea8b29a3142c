//! Sidebar sections built from persisted tag data.

use serde::Serialize;

use crate::aggregate::TagCounts;
use crate::category::Category;
use crate::persist::CategorizedTagDocument;

/// One linked tag in a sidebar section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarEntry {
    /// URL slug.
    pub slug: String,
    /// First-seen display value, or the slug when none was recorded.
    pub display: String,
    /// Posts carrying the tag.
    pub count: usize,
    /// Listing URL, e.g. `/artists/karl-bryullov`.
    pub href: String,
}

/// A titled, truncated list of tags for one category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SidebarSection {
    pub category: Category,
    pub label: &'static str,
    pub route: &'static str,
    /// Top entries, most used first; ties broken by slug.
    pub entries: Vec<SidebarEntry>,
    /// Distinct slugs in the category before truncation.
    pub total: usize,
    /// Whether entries were cut at `limit`.
    pub has_more: bool,
}

/// Build the section for `category`, keeping at most `limit` entries.
///
/// Slugs with no display value fall back to the slug itself.
pub fn category_section(
    doc: &CategorizedTagDocument,
    category: Category,
    limit: usize,
) -> SidebarSection {
    let display = doc.display_values.get(category);
    build_section(category, doc.counts.get(category), limit, |slug| {
        display.get(slug).cloned().unwrap_or_else(|| slug.to_string())
    })
}

/// Build a plain-tag section from the flat count.
///
/// The flat artifact carries no display values, so entries show slugs.
pub fn flat_section(flat: &TagCounts, limit: usize) -> SidebarSection {
    build_section(Category::Tag, flat, limit, str::to_string)
}

/// Sections for every category, in display order, skipping empty ones.
pub fn all_sections(doc: &CategorizedTagDocument, limit: usize) -> Vec<SidebarSection> {
    Category::ALL
        .into_iter()
        .map(|c| category_section(doc, c, limit))
        .filter(|s| s.total > 0)
        .collect()
}

fn build_section(
    category: Category,
    counts: &TagCounts,
    limit: usize,
    display: impl Fn(&str) -> String,
) -> SidebarSection {
    let mut ranked: Vec<(&String, usize)> = counts.iter().map(|(s, &c)| (s, c)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let total = ranked.len();
    let entries = ranked
        .into_iter()
        .take(limit)
        .map(|(slug, count)| SidebarEntry {
            display: display(slug),
            href: format!("{}/{}", category.route(), slug),
            slug: slug.clone(),
            count,
        })
        .collect();

    SidebarSection {
        category,
        label: category.label(),
        route: category.route(),
        entries,
        total,
        has_more: total > limit,
    }
}
