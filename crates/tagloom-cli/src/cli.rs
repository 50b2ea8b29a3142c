//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level arguments for `tagloom`.
#[derive(Parser, Debug)]
#[command(name = "tagloom", author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "TAGLOOM_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Aggregate tags from content and write the tag artifacts.
    Build {
        /// Content directory (overrides `content.path`).
        #[arg(long)]
        content: Option<String>,

        /// Output directory (overrides `output.dir`).
        #[arg(short, long)]
        output: Option<String>,

        /// Count tags on draft posts too.
        #[arg(long)]
        include_drafts: bool,

        /// Print the summary without writing artifacts.
        #[arg(long)]
        dry_run: bool,
    },

    /// Tag inspection.
    Tags(TagsCommand),

    /// List published posts, newest update first.
    Posts {
        /// 1-based page number.
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Print version information.
    Version,

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Tag-specific subcommands.
#[derive(Parser, Debug)]
pub struct TagsCommand {
    #[command(subcommand)]
    pub command: TagsAction,
}

/// Available tag subcommands.
#[derive(Subcommand, Debug)]
pub enum TagsAction {
    /// Parse raw tags and print the result as JSON.
    Parse {
        /// Raw tag strings, e.g. "artist:Karl Bryullov".
        #[arg(required = true)]
        raw: Vec<String>,
    },

    /// Show the most used tags per category from the built artifact.
    Sidebar {
        /// Entries per category (defaults to `listing.sidebar_limit`).
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only show one category: artist, movement, location, or tag.
        #[arg(long)]
        category: Option<String>,
    },
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "output.dir").
        key: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite existing file.
        #[arg(long)]
        force: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_default() {
        let args = CliArgs::parse_from(["tagloom"]);
        assert!(!args.verbose);
        assert!(!args.quiet);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_cli_args_flags() {
        let args = CliArgs::parse_from(["tagloom", "-v", "--config", "/tmp/site.toml"]);
        assert!(args.verbose);
        assert_eq!(args.config.as_deref(), Some("/tmp/site.toml"));

        let args = CliArgs::parse_from(["tagloom", "--quiet"]);
        assert!(args.quiet);
    }

    #[test]
    fn test_build_command_defaults() {
        let args = CliArgs::parse_from(["tagloom", "build"]);
        match args.command {
            Some(Command::Build {
                content,
                output,
                include_drafts,
                dry_run,
            }) => {
                assert!(content.is_none());
                assert!(output.is_none());
                assert!(!include_drafts);
                assert!(!dry_run);
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_build_command_options() {
        let args = CliArgs::parse_from([
            "tagloom",
            "build",
            "--content",
            "data",
            "-o",
            "public",
            "--include-drafts",
            "--dry-run",
        ]);
        match args.command {
            Some(Command::Build {
                content,
                output,
                include_drafts,
                dry_run,
            }) => {
                assert_eq!(content.as_deref(), Some("data"));
                assert_eq!(output.as_deref(), Some("public"));
                assert!(include_drafts);
                assert!(dry_run);
            }
            _ => panic!("Expected Build command with options"),
        }
    }

    #[test]
    fn test_tags_parse_command() {
        let args = CliArgs::parse_from(["tagloom", "tags", "parse", "artist:Goya", "Volcano"]);
        match args.command {
            Some(Command::Tags(TagsCommand {
                command: TagsAction::Parse { raw },
            })) => assert_eq!(raw, vec!["artist:Goya", "Volcano"]),
            _ => panic!("Expected Tags Parse command"),
        }
    }

    #[test]
    fn test_tags_parse_requires_input() {
        assert!(CliArgs::try_parse_from(["tagloom", "tags", "parse"]).is_err());
    }

    #[test]
    fn test_tags_sidebar_command() {
        let args = CliArgs::parse_from([
            "tagloom",
            "tags",
            "sidebar",
            "--limit",
            "3",
            "--category",
            "artist",
        ]);
        match args.command {
            Some(Command::Tags(TagsCommand {
                command: TagsAction::Sidebar { limit, category },
            })) => {
                assert_eq!(limit, Some(3));
                assert_eq!(category.as_deref(), Some("artist"));
            }
            _ => panic!("Expected Tags Sidebar command"),
        }
    }

    #[test]
    fn test_posts_command() {
        let args = CliArgs::parse_from(["tagloom", "posts"]);
        assert!(matches!(args.command, Some(Command::Posts { page: 1 })));

        let args = CliArgs::parse_from(["tagloom", "posts", "--page", "4"]);
        assert!(matches!(args.command, Some(Command::Posts { page: 4 })));
    }

    #[test]
    fn test_version_command() {
        let args = CliArgs::parse_from(["tagloom", "version"]);
        assert!(matches!(args.command, Some(Command::Version)));
    }

    #[test]
    fn test_config_commands() {
        let args = CliArgs::parse_from(["tagloom", "config", "path"]);
        assert!(matches!(
            args.command,
            Some(Command::Config(ConfigCommand {
                command: ConfigAction::Path
            }))
        ));

        let args = CliArgs::parse_from(["tagloom", "config", "get", "output.dir"]);
        match args.command {
            Some(Command::Config(ConfigCommand {
                command: ConfigAction::Get { key },
            })) => assert_eq!(key, "output.dir"),
            _ => panic!("Expected Config Get command"),
        }

        let args = CliArgs::parse_from(["tagloom", "config", "init", "--force"]);
        match args.command {
            Some(Command::Config(ConfigCommand {
                command: ConfigAction::Init { file, force },
            })) => {
                assert!(file.is_none());
                assert!(force);
            }
            _ => panic!("Expected Config Init command"),
        }
    }
}
