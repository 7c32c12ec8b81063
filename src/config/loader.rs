use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::core::AdopsConfig;
use super::CONFIG_FILE_NAME;
use crate::errors::{Error, Result};

/// Maximum number of directories searched upward for a config file
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::io::Result<String> {
    fs::read_to_string(path)
}

/// Pure function to parse config from a TOML string
pub fn parse_config(contents: &str, path: &Path) -> Result<AdopsConfig> {
    toml::from_str::<AdopsConfig>(contents).map_err(|e| Error::config(path, e.to_string().trim()))
}

/// Load exactly this file; any failure is an error
pub fn load_config_file(path: &Path) -> Result<AdopsConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::file_system("Failed to read config file", path, e))?;
    let config = parse_config(&contents, path)?;
    debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading config from a discovered path, warning on anything but absence
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<AdopsConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_config(&contents, config_path) {
        Ok(config) => {
            debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file, first match wins
pub fn discover_config(start: PathBuf) -> AdopsConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH + 1)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH + 1
            );
            AdopsConfig::default()
        })
}

/// Discover config from the current directory
pub fn load_config() -> AdopsConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            AdopsConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PresencePolicy;
    use crate::formatting::ColorMode;
    use crate::locale::Locale;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let contents = indoc! {r#"
            [calculator]
            presence = "zero_is_value"
            reset_on_mode_switch = true

            [display]
            locale = "es"
            color = "never"
        "#};
        let config = parse_config(contents, Path::new(".adops.toml")).unwrap();
        let settings = config.settings();
        assert_eq!(settings.presence, PresencePolicy::ZeroIsValue);
        assert!(settings.reset_on_mode_switch);
        assert_eq!(config.locale(), Locale::Es);
        assert_eq!(config.color_mode(), ColorMode::Never);
    }

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config = parse_config("[display]\nlocale = \"es\"\n", Path::new("x")).unwrap();
        assert_eq!(config.settings(), crate::state::Settings::default());
        assert_eq!(config.color_mode(), ColorMode::Auto);
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        let err = parse_config("[display]\ncolor = \"teal\"\n", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_directory_ancestors_walks_up() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c"), 10).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
                PathBuf::from("/a"),
                PathBuf::from("/"),
            ]
        );
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs.len(), 2);
    }

    #[test]
    fn test_discover_config_in_parent_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[calculator]\nreset_on_mode_switch = true\n",
        )
        .unwrap();
        let nested = temp.path().join("campaigns").join("q3");
        fs::create_dir_all(&nested).unwrap();

        let config = discover_config(nested);
        assert!(config.settings().reset_on_mode_switch);
    }

    #[test]
    fn test_discover_config_skips_invalid_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "not [valid toml").unwrap();

        let config = discover_config(temp.path().to_path_buf());
        assert_eq!(config, AdopsConfig::default());
    }

    #[test]
    fn test_load_config_file_missing_is_error() {
        let temp = TempDir::new().unwrap();
        let err = load_config_file(&temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::FileSystem { .. }));
    }
}
