//! Configuration for the `tagloom` CLI.
//!
//! [`TagloomConfig`] is assembled with `confyg` from a TOML file, then
//! `TAGLOOM_*` environment variables, then built-in defaults.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `TAGLOOM_CONFIG` environment variable
//! 3. XDG default: `~/.config/tagloom/config.toml`
//! 4. Built-in defaults

use std::path::PathBuf;

use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use tagloom_core::traits::ConfigProvider;
use tagloom_core::util::paths::{expand_tilde, resolve_against, user_config_file};
use tagloom_core::{Error, Result};
use tagloom_tags::persist::{ArtifactPaths, CATEGORIZED_FILE, FLAT_FILE};

const ENV_PREFIX: &str = "TAGLOOM";
const CONFIG_ENV: &str = "TAGLOOM_CONFIG";

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagloomConfig {
    /// Site name, shown in command output.
    pub project_name: String,

    /// Site root; relative paths below are resolved against it.
    /// Defaults to the working directory.
    pub base_path: Option<String>,

    /// Content discovery settings.
    pub content: ContentConfig,
    /// Build behaviour.
    pub build: BuildConfig,
    /// Artifact locations.
    pub output: OutputConfig,
    /// Listing and sidebar sizes.
    pub listing: ListingConfig,
}

/// Where posts live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content directory; defaults to `<base>/data`.
    pub path: Option<String>,

    /// Glob, relative to the content directory, selecting posts.
    pub pattern: String,
}

/// Build behaviour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Count tags on drafts (preview builds).
    #[serde(deserialize_with = "lenient::deserialize")]
    pub include_drafts: bool,
}

/// Where artifacts are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory; defaults to `<base>/app`.
    pub dir: Option<String>,

    /// File name of the flat count artifact.
    pub flat_file: String,
    /// File name of the categorized artifact.
    pub categorized_file: String,
}

/// Listing and sidebar sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Posts per listing page.
    #[serde(deserialize_with = "lenient::deserialize")]
    pub posts_per_page: usize,

    /// Entries per category in the sidebar.
    #[serde(deserialize_with = "lenient::deserialize")]
    pub sidebar_limit: usize,

    /// Tags shown on a post card.
    #[serde(deserialize_with = "lenient::deserialize")]
    pub tag_limit: usize,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for TagloomConfig {
    fn default() -> Self {
        Self {
            project_name: "tagloom".to_string(),
            base_path: None,
            content: ContentConfig::default(),
            build: BuildConfig::default(),
            output: OutputConfig::default(),
            listing: ListingConfig::default(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: None,
            pattern: "blog/**/*.md*".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            flat_file: FLAT_FILE.to_string(),
            categorized_file: CATEGORIZED_FILE.to_string(),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            posts_per_page: 5,
            sidebar_limit: 10,
            tag_limit: 15,
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl TagloomConfig {
    /// Load configuration from file, environment, and defaults.
    ///
    /// A config path that does not exist is not an error; defaults and
    /// environment values still apply.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                log::debug!("Loading config from {}", path.display());
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level(ENV_PREFIX);
        for section in ["content", "build", "output", "listing"] {
            env_opts.add_section(section);
        }
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        Self::default_config_path()
    }

    /// The XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        user_config_file("tagloom")
    }

    /// Serialize to pretty-printed TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Artifact locations under `output_dir`, using the configured names.
    pub fn artifact_paths_in(&self, output_dir: impl Into<PathBuf>) -> ArtifactPaths {
        ArtifactPaths::with_names(
            output_dir.into(),
            &self.output.flat_file,
            &self.output.categorized_file,
        )
    }

    /// Artifact locations under the configured output directory.
    pub fn artifact_paths(&self) -> Result<ArtifactPaths> {
        Ok(self.artifact_paths_in(self.output_path()?))
    }
}

// ============================================================================
// ConfigProvider implementation
// ============================================================================

impl ConfigProvider for TagloomConfig {
    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn base_path(&self) -> Result<PathBuf> {
        match &self.base_path {
            Some(p) => Ok(expand_tilde(p)),
            None => std::env::current_dir()
                .map_err(|e| Error::config(format!("Could not determine base path: {e}"))),
        }
    }

    fn content_path(&self) -> Result<PathBuf> {
        let base = self.base_path()?;
        Ok(match &self.content.path {
            Some(p) => resolve_against(&base, p),
            None => base.join("data"),
        })
    }

    fn output_path(&self) -> Result<PathBuf> {
        let base = self.base_path()?;
        Ok(match &self.output.dir {
            Some(p) => resolve_against(&base, p),
            None => base.join("app"),
        })
    }
}

// ============================================================================
// Env values arrive as strings
// ============================================================================

mod lenient {
    use std::fmt::Display;
    use std::str::FromStr;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Native(T),
        Text(String),
    }

    /// Accept either the native value or its string form.
    pub fn deserialize<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + FromStr,
        T::Err: Display,
    {
        match Raw::<T>::deserialize(deserializer)? {
            Raw::Native(value) => Ok(value),
            Raw::Text(text) => text.trim().parse().map_err(D::Error::custom),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
