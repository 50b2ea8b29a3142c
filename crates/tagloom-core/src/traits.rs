//! Core traits for Tagloom.
//!
//! [`ConfigProvider`] abstracts where content lives and where build
//! artifacts are written, so handlers can be driven by the real
//! configuration or by a test fixture.

use std::path::PathBuf;

use crate::Result;

/// Trait for site configuration.
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use tagloom_core::traits::ConfigProvider;
/// use tagloom_core::Result;
///
/// #[derive(Clone)]
/// struct SiteConfig {
///     root: PathBuf,
/// }
///
/// impl ConfigProvider for SiteConfig {
///     fn project_name(&self) -> &str {
///         "art-blog"
///     }
///
///     fn base_path(&self) -> Result<PathBuf> {
///         Ok(self.root.clone())
///     }
///
///     fn content_path(&self) -> Result<PathBuf> {
///         Ok(self.root.join("data"))
///     }
///
///     fn output_path(&self) -> Result<PathBuf> {
///         Ok(self.root.join("app"))
///     }
/// }
/// ```
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// The project name, used in log output and default paths.
    fn project_name(&self) -> &str;

    /// Root directory of the site.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined.
    fn base_path(&self) -> Result<PathBuf>;

    /// Directory holding the content documents.
    fn content_path(&self) -> Result<PathBuf>;

    /// Directory the tag artifacts are written to.
    fn output_path(&self) -> Result<PathBuf>;
}
