//! Listing helpers: newest-first ordering and pagination.

use serde::Serialize;

use crate::item::ContentItem;

/// Drop drafts and order the rest newest-first by `update`, falling back
/// to `date`.
///
/// The sort is stable: items with equal effective dates keep their input
/// order.
pub fn sort_by_update(items: &[ContentItem]) -> Vec<ContentItem> {
    let mut published: Vec<ContentItem> =
        items.iter().filter(|i| !i.is_draft()).cloned().collect();
    published.sort_by(|a, b| b.effective_date().cmp(&a.effective_date()));
    published
}

/// One page of a paginated listing.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// 1-based page number.
    pub current_page: usize,
    /// Total number of pages, at least 1.
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Whether a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a next page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Link to the previous page under `/{base}`; page 1 is the bare listing.
    pub fn prev_href(&self, base: &str) -> Option<String> {
        if !self.has_prev() {
            return None;
        }
        let base = base.trim_matches('/');
        let prev = self.current_page - 1;
        Some(if prev == 1 {
            format!("/{base}/")
        } else {
            format!("/{base}/page/{prev}")
        })
    }

    /// Link to the next page under `/{base}`.
    pub fn next_href(&self, base: &str) -> Option<String> {
        if !self.has_next() {
            return None;
        }
        let base = base.trim_matches('/');
        Some(format!("/{base}/page/{}", self.current_page + 1))
    }
}

/// Cut `items` into pages of `per_page` and return page `page` (1-based).
///
/// Out-of-range pages are clamped into `1..=total_pages`; a `per_page` of
/// zero is treated as one.
pub fn paginate<T: Clone>(items: &[T], page: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_pages = items.len().div_ceil(per_page).max(1);
    let current_page = page.clamp(1, total_pages);

    let start = (current_page - 1) * per_page;
    let end = (start + per_page).min(items.len());
    let items = items.get(start..end).map(<[T]>::to_vec).unwrap_or_default();

    Page {
        items,
        current_page,
        total_pages,
    }
}
