//! Command-line and file configuration.
//!
//! Values resolve in order: CLI flag, `config.json` in the filedeck home,
//! built-in default.

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app::{AppOptions, DEFAULT_NOTIFICATION_LIMIT};
use crate::domain::file::Location;

/// Name of the filedeck home directory under the user's home.
pub const FILEDECK_DIR: &str = ".filedeck";
const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "filedeck.log";
const STORE_DIR: &str = "store";
const DOWNLOADS_DIR: &str = "downloads";

/// Returns the filedeck home directory (`~/.filedeck`).
pub fn filedeck_home() -> PathBuf {
    if let Some(home_dir) = dirs::home_dir() {
        return home_dir.join(FILEDECK_DIR);
    }

    PathBuf::from(FILEDECK_DIR)
}

/// Command-line arguments.
#[derive(Debug, Default, Parser)]
#[command(name = "filedeck", version, about = "Browse and manage files in a two-location store")]
pub struct Args {
    /// Root directory of the file store.
    #[arg(long)]
    pub store_root: Option<PathBuf>,
    /// Directory downloaded files are saved into.
    #[arg(long)]
    pub download_dir: Option<PathBuf>,
    /// Path of the JSON config file.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Location selected at startup.
    #[arg(long, value_enum)]
    pub location: Option<Location>,
    /// Log level filter (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Contents of `config.json`. Every key is optional.
#[derive(Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub store_root: Option<PathBuf>,
    pub download_dir: Option<PathBuf>,
    pub location: Option<Location>,
    pub notification_limit: Option<usize>,
}

/// Failure while loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Fully resolved runtime configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PanelConfig {
    pub download_dir: PathBuf,
    pub initial_location: Location,
    pub log_path: PathBuf,
    pub notification_limit: usize,
    pub store_root: PathBuf,
}

impl PanelConfig {
    /// Resolves the configuration from `args`, the config file, and defaults
    /// rooted at `home`.
    ///
    /// # Errors
    /// Returns an error when an existing config file cannot be read or
    /// parsed. A missing file is treated as empty.
    pub fn resolve(args: &Args, home: &Path) -> Result<Self, ConfigError> {
        let config_path = args
            .config
            .clone()
            .unwrap_or_else(|| home.join(CONFIG_FILE));
        let file_config = load_file_config(&config_path)?;

        let store_root = args
            .store_root
            .clone()
            .or(file_config.store_root)
            .unwrap_or_else(|| home.join(STORE_DIR));
        let download_dir = args
            .download_dir
            .clone()
            .or(file_config.download_dir)
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| home.join(DOWNLOADS_DIR));
        let initial_location = args
            .location
            .or(file_config.location)
            .unwrap_or_default();
        let notification_limit = file_config
            .notification_limit
            .unwrap_or(DEFAULT_NOTIFICATION_LIMIT);

        Ok(Self {
            download_dir,
            initial_location,
            log_path: home.join(LOG_FILE),
            notification_limit,
            store_root,
        })
    }

    /// Returns the panel startup options.
    pub fn app_options(&self) -> AppOptions {
        AppOptions {
            download_dir: self.download_dir.clone(),
            initial_location: self.initial_location,
            notification_limit: self.notification_limit,
        }
    }
}

/// Reads `path` as a [`FileConfig`]; a missing file yields the default.
///
/// # Errors
/// Returns an error when the file exists but cannot be read or parsed.
pub fn load_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(FileConfig::default()),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_resolve_uses_home_defaults_without_config_file() {
        // Arrange
        let home = TempDir::new().expect("failed to create temp dir");
        let args = Args {
            download_dir: Some(PathBuf::from("/tmp/downloads")),
            ..Args::default()
        };

        // Act
        let config = PanelConfig::resolve(&args, home.path()).expect("failed to resolve");

        // Assert
        assert_eq!(config.store_root, home.path().join(STORE_DIR));
        assert_eq!(config.log_path, home.path().join(LOG_FILE));
        assert_eq!(config.initial_location, Location::Images);
        assert_eq!(config.notification_limit, DEFAULT_NOTIFICATION_LIMIT);
    }

    #[test]
    fn test_resolve_prefers_cli_over_config_file() {
        // Arrange
        let home = TempDir::new().expect("failed to create temp dir");
        fs::write(
            home.path().join(CONFIG_FILE),
            r#"{"store_root": "/srv/files", "location": "docs", "notification_limit": 3}"#,
        )
        .expect("failed to write config");
        let args = Args {
            store_root: Some(PathBuf::from("/data/files")),
            ..Args::default()
        };

        // Act
        let config = PanelConfig::resolve(&args, home.path()).expect("failed to resolve");

        // Assert
        assert_eq!(config.store_root, PathBuf::from("/data/files"));
        assert_eq!(config.initial_location, Location::Docs);
        assert_eq!(config.notification_limit, 3);
    }

    #[test]
    fn test_load_file_config_rejects_unknown_keys() {
        // Arrange
        let home = TempDir::new().expect("failed to create temp dir");
        let path = home.path().join(CONFIG_FILE);
        fs::write(&path, r#"{"colour": "blue"}"#).expect("failed to write config");

        // Act
        let result = load_file_config(&path);

        // Assert
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_args_parse_location_flag() {
        // Arrange
        let argv = ["filedeck", "--location", "docs", "--log-level", "debug"];

        // Act
        let args = Args::try_parse_from(argv).expect("failed to parse args");

        // Assert
        assert_eq!(args.location, Some(Location::Docs));
        assert_eq!(args.log_level, "debug");
    }
}
