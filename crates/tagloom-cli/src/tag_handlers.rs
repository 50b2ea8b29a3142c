//! Handler functions for `build`, `tags`, and `posts`.
//!
//! Each handler has a data-returning core (`run_build`, `sidebar_sections`,
//! `posts_page`) and a thin printing wrapper.

use std::path::PathBuf;

use tagloom_content::{load_items, paginate, sort_by_update, ContentItem, Page};
use tagloom_core::traits::ConfigProvider;
use tagloom_core::util::files::exists;
use tagloom_core::util::paths::expand_tilde;
use tagloom_core::{Error, Result};
use tagloom_tags::{
    aggregate, all_sections, category_section, load_categorized, parse_tag, save_artifacts,
    AggregateStats, ArtifactPaths, Category, ParsedTag, SidebarSection,
};

use crate::config::TagloomConfig;

// ============================================================================
// Option types
// ============================================================================

/// Options for `tagloom build`.
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Content directory override.
    pub content: Option<String>,
    /// Output directory override.
    pub output: Option<String>,
    /// Count drafts even if the config says otherwise.
    pub include_drafts: bool,
    /// Skip writing artifacts.
    pub dry_run: bool,
}

/// What a build did.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Directory the content was read from.
    pub content_dir: PathBuf,
    /// Artifact destinations, written or not.
    pub paths: ArtifactPaths,
    /// Posts parsed from frontmatter.
    pub items_loaded: usize,
    /// Files skipped for lacking a frontmatter block.
    pub files_skipped: usize,
    /// Distinct slugs in the flat count.
    pub distinct_tags: usize,
    /// Aggregator counters.
    pub stats: AggregateStats,
    /// Whether the artifacts were written (false on a dry run).
    pub written: bool,
}

// ============================================================================
// Build
// ============================================================================

/// Load content, aggregate tags, and write the artifacts.
pub async fn run_build(config: &TagloomConfig, options: &BuildOptions) -> Result<BuildReport> {
    let content_dir = match &options.content {
        Some(p) => expand_tilde(p),
        None => config.content_path()?,
    };
    let output_dir = match &options.output {
        Some(p) => expand_tilde(p),
        None => config.output_path()?,
    };
    let include_drafts = options.include_drafts || config.build.include_drafts;

    if !exists(&content_dir).await {
        return Err(Error::not_found(format!(
            "Content directory {} does not exist",
            content_dir.display()
        )));
    }

    log::info!(
        "Building tags for {} from {}{}",
        config.project_name(),
        content_dir.display(),
        if include_drafts { " (drafts included)" } else { "" }
    );

    let set = load_items(&content_dir, Some(&config.content.pattern)).await?;
    let agg = aggregate(&set.items, include_drafts);
    let paths = config.artifact_paths_in(output_dir);

    if !options.dry_run {
        save_artifacts(&agg, &paths)?;
    }

    Ok(BuildReport {
        content_dir,
        paths,
        items_loaded: set.len(),
        files_skipped: set.skipped.len(),
        distinct_tags: agg.distinct_tags(),
        stats: agg.stats,
        written: !options.dry_run,
    })
}

/// `tagloom build`.
pub async fn handle_build(config: &TagloomConfig, options: BuildOptions) -> Result<()> {
    let report = run_build(config, &options).await?;
    let stats = &report.stats;

    println!("Tags built from: {}", report.content_dir.display());
    println!("  Posts loaded:    {}", report.items_loaded);
    println!("  Posts counted:   {}", stats.items_included);
    println!("  Drafts skipped:  {}", stats.drafts_skipped);
    println!("  Untagged:        {}", stats.untagged);
    println!("  Tag occurrences: {}", stats.tags_counted);
    println!("  Distinct tags:   {}", report.distinct_tags);
    if report.files_skipped > 0 {
        println!("  No frontmatter:  {}", report.files_skipped);
    }
    if stats.empty_skipped > 0 {
        println!("  Blank tags:      {}", stats.empty_skipped);
    }

    if report.written {
        println!("\nWrote {}", report.paths.flat.display());
        println!("Wrote {}", report.paths.categorized.display());
    } else {
        println!("\nDry run: artifacts not written.");
    }
    Ok(())
}

// ============================================================================
// Tags
// ============================================================================

/// Parse each raw tag.
pub fn parse_tags(raw: &[String]) -> Vec<ParsedTag> {
    raw.iter().map(|r| parse_tag(r)).collect()
}

/// `tagloom tags parse`.
pub fn handle_parse(raw: &[String]) -> Result<()> {
    let json = serde_json::to_string_pretty(&parse_tags(raw))?;
    println!("{json}");
    Ok(())
}

/// Sidebar sections from the categorized artifact.
///
/// A missing artifact reads as an empty document. With `category` set,
/// exactly that section is returned even when empty.
pub fn sidebar_sections(
    config: &TagloomConfig,
    limit: Option<usize>,
    category: Option<&str>,
) -> Result<Vec<SidebarSection>> {
    let paths = config.artifact_paths()?;
    let limit = limit.unwrap_or(config.listing.sidebar_limit);

    let doc = match load_categorized(&paths.categorized)? {
        Some(doc) => doc,
        None => {
            log::warn!(
                "{} not found; run `tagloom build` first",
                paths.categorized.display()
            );
            Default::default()
        }
    };

    Ok(match category {
        Some(name) => {
            let category: Category = name.parse()?;
            vec![category_section(&doc, category, limit)]
        }
        None => all_sections(&doc, limit),
    })
}

/// `tagloom tags sidebar`.
pub fn handle_sidebar(
    config: &TagloomConfig,
    limit: Option<usize>,
    category: Option<&str>,
) -> Result<()> {
    let sections = sidebar_sections(config, limit, category)?;
    if sections.is_empty() {
        println!("No tags.");
        return Ok(());
    }

    for section in &sections {
        println!("{} ({})", section.label, section.total);
        for entry in &section.entries {
            println!("  {:<32} {:>4}  {}", entry.display, entry.count, entry.href);
        }
        if section.has_more {
            println!("  ... all at {}", section.route);
        }
    }
    Ok(())
}

// ============================================================================
// Posts
// ============================================================================

/// One page of published posts, newest update first.
pub async fn posts_page(config: &TagloomConfig, page: usize) -> Result<Page<ContentItem>> {
    let content_dir = config.content_path()?;
    let set = load_items(&content_dir, Some(&config.content.pattern)).await?;
    let sorted = sort_by_update(&set.items);
    Ok(paginate(&sorted, page, config.listing.posts_per_page))
}

/// `tagloom posts`.
pub async fn handle_posts(config: &TagloomConfig, page: usize) -> Result<()> {
    let page = posts_page(config, page).await?;
    let tag_limit = config.listing.tag_limit;

    for item in &page.items {
        let tags: Vec<String> = item
            .tags
            .iter()
            .take(tag_limit)
            .map(|t| parse_tag(t).value)
            .collect();
        println!(
            "{}  {}  /{}",
            item.effective_date().format("%Y-%m-%d"),
            item.title,
            item.path
        );
        if !tags.is_empty() {
            println!("            [{}]", tags.join(", "));
        }
    }

    println!("\nPage {} of {}", page.current_page, page.total_pages);
    if let Some(prev) = page.prev_href("blog") {
        println!("  prev: {prev}");
    }
    if let Some(next) = page.next_href("blog") {
        println!("  next: {next}");
    }
    Ok(())
}
