//! Tag parsing, aggregation, and persisted tag artifacts.
//!
//! # Modules
//!
//! - [`category`]: The closed [`Category`] set and [`CategoryMap`]
//! - [`parser`]: Prefix parsing, slugs, and tag URLs
//! - [`aggregate`]: Counting tags across a content set
//! - [`persist`]: Writing and reading the JSON artifacts
//! - [`sidebar`]: Top-N sections for listing pages

#![doc = include_str!("../README.md")]

pub mod aggregate;
pub mod category;
pub mod parser;
pub mod persist;
pub mod sidebar;

pub use aggregate::{
    aggregate, AggregateStats, DisplayValues, TagAggregation, TagCounts, TaggedItem,
};
pub use category::{Category, CategoryMap};
pub use parser::{
    categorize_counts, display_value, group_by_category, parse_tag, slugify, tag_url, ParsedTag,
};
pub use persist::{
    load_categorized, load_flat, save_artifacts, ArtifactPaths, CategorizedTagDocument,
};
pub use sidebar::{all_sections, category_section, flat_section, SidebarEntry, SidebarSection};
