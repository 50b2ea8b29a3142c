//! `tagloom config {path,get,init}`.

use std::path::{Path, PathBuf};

use tagloom_core::{write_atomic, Error, Result};

use crate::cli::ConfigAction;
use crate::config::TagloomConfig;

/// Handle a config subcommand.
///
/// Takes the raw `--config` value rather than a loaded config so `path`
/// and `init` work before any file exists.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => {
            let path = TagloomConfig::resolve_config_path(config_path).ok_or_else(|| {
                Error::config("Could not determine config directory for this platform")
            })?;
            println!("{}", path.display());
            if !path.exists() {
                eprintln!("(not created yet; run `tagloom config init`)");
            }
            Ok(())
        }
        ConfigAction::Get { key } => {
            let config = TagloomConfig::load(config_path)?;
            println!("{}", config_value(&config, &key)?);
            Ok(())
        }
        ConfigAction::Init { file, force } => {
            let path = match file {
                Some(p) => PathBuf::from(p),
                None => TagloomConfig::default_config_path()
                    .ok_or_else(|| Error::config("Could not determine config directory"))?,
            };
            write_default_config(&path, force)?;
            println!("Config file created at {}", path.display());
            Ok(())
        }
    }
}

/// Look up a dotted key (`listing.sidebar_limit`) and render it for stdout.
///
/// Unset optional values are reported as not found.
pub fn config_value(config: &TagloomConfig, key: &str) -> Result<String> {
    let root = toml::Value::try_from(config).map_err(|e| Error::config(e.to_string()))?;

    let value = key
        .split('.')
        .try_fold(&root, |node, part| node.as_table()?.get(part))
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))?;

    Ok(match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Table(_) | toml::Value::Array(_) => {
            toml::to_string_pretty(value).map_err(|e| Error::config(e.to_string()))?
        }
        other => other.to_string(),
    })
}

/// Write the default configuration to `path`, refusing to clobber unless
/// `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    let text = TagloomConfig::default().to_toml_string()?;
    write_atomic(path, text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_value_top_level_and_nested() {
        let config = TagloomConfig::default();
        assert_eq!(config_value(&config, "project_name").unwrap(), "tagloom");
        assert_eq!(config_value(&config, "listing.posts_per_page").unwrap(), "5");
        assert_eq!(config_value(&config, "build.include_drafts").unwrap(), "false");
        assert_eq!(
            config_value(&config, "output.flat_file").unwrap(),
            "tag-data.json"
        );
    }

    #[test]
    fn test_config_value_section() {
        let rendered = config_value(&TagloomConfig::default(), "listing").unwrap();
        assert!(rendered.contains("sidebar_limit = 10"));
    }

    #[test]
    fn test_config_value_missing() {
        let config = TagloomConfig::default();
        let err = config_value(&config, "listing.nope").unwrap_err();
        assert!(err.to_string().contains("not found"));

        // Unset optionals are not serialized.
        assert!(config_value(&config, "output.dir").is_err());
        // Cannot descend into a scalar.
        assert!(config_value(&config, "project_name.x").is_err());
    }

    #[test]
    fn test_get_command_reads_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\ndir = \"public\"\n").unwrap();

        let result = handle_config_command(
            Some(path.to_str().unwrap()),
            ConfigAction::Get {
                key: "output.dir".into(),
            },
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_path_command() {
        assert!(handle_config_command(Some("/explicit/config.toml"), ConfigAction::Path).is_ok());
    }

    #[test]
    fn test_init_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("tagloom").join("config.toml");

        let result = handle_config_command(
            None,
            ConfigAction::Init {
                file: Some(path.to_string_lossy().into_owned()),
                force: false,
            },
        );
        assert!(result.is_ok());

        let written: TagloomConfig =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, TagloomConfig::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "existing").unwrap();

        let err = write_default_config(&path, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing");

        write_default_config(&path, true).unwrap();
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .contains("project_name"));
    }
}
