//! Async loading of a content directory.

use std::path::{Path, PathBuf};

use tagloom_core::util::files::{find_all_files, read_file, FindOptions};
use tagloom_core::Result;

use crate::frontmatter::parse_item;
use crate::item::ContentItem;

/// Items loaded from a content directory.
#[derive(Debug, Clone, Default)]
pub struct ContentSet {
    /// Parsed items, in relative-path order.
    pub items: Vec<ContentItem>,
    /// Files that matched but carried no frontmatter.
    pub skipped: Vec<PathBuf>,
}

impl ContentSet {
    /// Number of files that produced an item.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items were loaded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Load every Markdown/MDX document under `content_dir`.
///
/// `pattern` is an optional glob on the path relative to `content_dir`
/// (e.g. `blog/**/*.mdx`). Files are processed in sorted path order so
/// the resulting item sequence is reproducible. A file with malformed
/// frontmatter aborts the load with an error naming that file.
pub async fn load_items(content_dir: &Path, pattern: Option<&str>) -> Result<ContentSet> {
    let mut options = FindOptions::markdown();
    if let Some(p) = pattern {
        options = options.with_pattern(p);
    }

    let files = find_all_files(content_dir, options).await?;
    let mut set = ContentSet::default();

    for file in files {
        let text = read_file(&file.path).await?;
        match parse_item(&file.relative_path, &text)? {
            Some(item) => set.items.push(item),
            None => {
                log::warn!(
                    "Skipping {}: no frontmatter block",
                    file.relative_path.display()
                );
                set.skipped.push(file.path);
            }
        }
    }

    log::info!(
        "Loaded {} item(s) from {} ({} skipped)",
        set.items.len(),
        content_dir.display(),
        set.skipped.len()
    );
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, text: &str) {
        let path = dir.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, text).unwrap();
    }

    #[tokio::test]
    async fn test_load_items_in_path_order() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "blog/b.mdx",
            "---\ntitle: B\ndate: 2024-01-02\ntags: [Baroque]\n---\n",
        );
        write(
            temp.path(),
            "blog/a.mdx",
            "---\ntitle: A\ndate: 2024-01-01\n---\n",
        );
        write(temp.path(), "blog/notes.txt", "ignored");

        let set = load_items(temp.path(), None).await.unwrap();

        let titles: Vec<_> = set.items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
        assert_eq!(set.items[1].tags, vec!["Baroque"]);
        assert!(set.skipped.is_empty());
    }

    #[tokio::test]
    async fn test_load_items_with_pattern() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "blog/post.mdx",
            "---\ntitle: Post\ndate: 2024-01-01\n---\n",
        );
        write(
            temp.path(),
            "authors/default.mdx",
            "---\nname: Someone\n---\n",
        );

        let set = load_items(temp.path(), Some("blog/**/*.mdx")).await.unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(set.items[0].slug, "post");
    }

    #[tokio::test]
    async fn test_load_items_skips_files_without_frontmatter() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "blog/readme.md", "# Notes\n");

        let set = load_items(temp.path(), None).await.unwrap();

        assert!(set.is_empty());
        assert_eq!(set.skipped.len(), 1);
    }

    #[tokio::test]
    async fn test_load_items_reports_bad_file() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "blog/broken.mdx", "---\ndate: 2024-01-01\n---\n");

        let err = load_items(temp.path(), None).await.unwrap_err();
        assert!(err.to_string().contains("broken.mdx"));
    }
}
