//! The `tagloom` application.

use std::sync::Arc;

use tagloom_core::traits::ConfigProvider;
use tagloom_core::Result;
use tracing_subscriber::EnvFilter;

use crate::cli::{CliArgs, Command, TagsAction};
use crate::config::TagloomConfig;
use crate::tag_handlers::BuildOptions;
use crate::{config_handlers, tag_handlers};

// ============================================================================
// TagloomCli
// ============================================================================

/// Loaded configuration plus command dispatch.
pub struct TagloomCli {
    name: String,
    config: Arc<TagloomConfig>,
    version: String,
}

impl TagloomCli {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = TagloomConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }

    /// Create with an already loaded config.
    pub fn new(name: impl Into<String>, config: TagloomConfig) -> Self {
        Self {
            name: name.into(),
            config: Arc::new(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &TagloomConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// `RUST_LOG` wins when set; otherwise `quiet` selects `warn`, `verbose`
    /// selects `debug`, and the default is `info`. `log` records from the
    /// library crates are bridged into the same subscriber.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // A subscriber may already be installed (tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the command selected by `args`.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);
        tracing::debug!(project = self.config.project_name(), "dispatching {:?}", args.command);

        match args.command {
            Some(Command::Build {
                content,
                output,
                include_drafts,
                dry_run,
            }) => {
                let options = BuildOptions {
                    content,
                    output,
                    include_drafts,
                    dry_run,
                };
                tag_handlers::handle_build(&self.config, options).await
            }
            Some(Command::Tags(tags)) => match tags.command {
                TagsAction::Parse { raw } => tag_handlers::handle_parse(&raw),
                TagsAction::Sidebar { limit, category } => {
                    tag_handlers::handle_sidebar(&self.config, limit, category.as_deref())
                }
            },
            Some(Command::Posts { page }) => tag_handlers::handle_posts(&self.config, page).await,
            Some(Command::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(Command::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            None => {
                println!("{} {}: use --help for usage", self.name, self.version);
                Ok(())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn site() -> (tempfile::TempDir, TagloomConfig) {
        let dir = tempfile::TempDir::new().unwrap();
        let post = dir.path().join("data/blog/post.md");
        std::fs::create_dir_all(post.parent().unwrap()).unwrap();
        std::fs::write(
            &post,
            "---\ntitle: Post\ndate: 2024-05-01\ntags: ['movement:Baroque']\n---\n",
        )
        .unwrap();
        let config = TagloomConfig {
            base_path: Some(dir.path().to_string_lossy().into_owned()),
            ..Default::default()
        };
        (dir, config)
    }

    #[test]
    fn test_new_and_version() {
        let cli = TagloomCli::new("tagloom", TagloomConfig::default()).with_version("9.9.9");
        assert_eq!(cli.name, "tagloom");
        assert_eq!(cli.version, "9.9.9");
        assert_eq!(cli.config().project_name(), "tagloom");
    }

    #[test]
    fn test_from_args_with_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "project_name = \"art-blog\"\n").unwrap();

        let args = CliArgs::parse_from(["tagloom", "--config", path.to_str().unwrap()]);
        let cli = TagloomCli::from_args("tagloom", &args).unwrap();
        assert_eq!(cli.config().project_name(), "art-blog");
    }

    #[test]
    fn test_init_logging_variants() {
        let cli = TagloomCli::new("tagloom", TagloomConfig::default());
        cli.init_logging(false, false);
        cli.init_logging(true, false);
        cli.init_logging(false, true);
    }

    #[tokio::test]
    async fn test_run_simple_commands() {
        let cli = TagloomCli::new("tagloom", TagloomConfig::default());
        for argv in [
            vec!["tagloom"],
            vec!["tagloom", "version"],
            vec!["tagloom", "tags", "parse", "artist:Goya"],
            vec!["tagloom", "config", "path"],
        ] {
            let args = CliArgs::parse_from(argv);
            assert!(cli.run(args).await.is_ok());
        }
    }

    #[tokio::test]
    async fn test_run_build_then_sidebar() {
        let (dir, config) = site();
        let cli = TagloomCli::new("tagloom", config);

        let args = CliArgs::parse_from(["tagloom", "-q", "build"]);
        cli.run(args).await.unwrap();
        assert!(dir.path().join("app/tag-data-categorized.json").exists());

        let args = CliArgs::parse_from(["tagloom", "tags", "sidebar", "--limit", "2"]);
        assert!(cli.run(args).await.is_ok());

        let args = CliArgs::parse_from(["tagloom", "posts"]);
        assert!(cli.run(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_propagates_errors() {
        let (_dir, config) = site();
        let cli = TagloomCli::new("tagloom", config);
        let args = CliArgs::parse_from(["tagloom", "tags", "sidebar", "--category", "painter"]);
        assert!(cli.run(args).await.is_err());
    }
}
