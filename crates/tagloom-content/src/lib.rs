//! Content items, frontmatter extraction, and listing helpers.
//!
//! # Modules
//!
//! - [`item`]: The [`ContentItem`] model and date handling
//! - [`frontmatter`]: Splitting and parsing YAML frontmatter
//! - [`loader`]: Async discovery and loading of a content directory
//! - [`listing`]: Sort-by-update and pagination

#![doc = include_str!("../README.md")]

pub mod frontmatter;
pub mod item;
pub mod listing;
pub mod loader;

pub use frontmatter::{parse_item, split_frontmatter, Frontmatter};
pub use item::{parse_date, ContentItem};
pub use listing::{paginate, sort_by_update, Page};
pub use loader::{load_items, ContentSet};
