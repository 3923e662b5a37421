use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no config directory for this platform")]
    ConfigDirNotFound,
    #[error("config file io: {0}")]
    Io(#[from] io::Error),
    #[error("cannot serialize config: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Owns the location of `config.toml` and reads it into an [`AppConfig`].
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Uses the platform config directory for `urlbar`.
    ///
    /// # Errors
    ///
    /// `ConfigError::ConfigDirNotFound` when the platform has no home directory.
    pub fn new() -> Result<Self, ConfigError> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| Self::with_dir(dirs.config_dir().to_path_buf()))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    #[must_use]
    pub const fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    fn config_path(&self, path_override: Option<&Path>) -> PathBuf {
        path_override.map_or_else(|| self.config_dir.join(CONFIG_FILE_NAME), Path::to_path_buf)
    }

    /// Reads the config file, or `path_override` when given.
    ///
    /// A missing file is created with the defaults. A file that does not
    /// parse is kept as it is and the defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the defaults cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let path = self.config_path(path_override);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "No config file, writing defaults");
                let config = AppConfig::default();
                write_atomically(&path, &toml::to_string_pretty(&config)?)?;
                return Ok(config);
            }
            Err(e) => return Err(e.into()),
        };

        toml::from_str(&content).map_or_else(
            |e| {
                warn!(path = %path.display(), error = %e, "Ignoring malformed config file");
                Ok(AppConfig::default())
            },
            |config| {
                debug!(path = %path.display(), "Config loaded");
                Ok(config)
            },
        )
    }
}

/// Writes through a temporary file in the same directory so a crash never
/// leaves a half-written config behind.
fn write_atomically(path: &Path, content: &str) -> io::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| io::Error::other("config path has no parent directory"))?;
    fs::create_dir_all(dir)?;

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::BarPosition;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("nested").join("urlbar"));

        let config = manager.load_config(None).unwrap();

        assert_eq!(config.bar.position, BarPosition::Top);
        assert!(manager.config_dir().join(CONFIG_FILE_NAME).is_file());
    }

    #[test]
    fn test_written_defaults_load_back() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());

        let written = manager.load_config(None).unwrap();
        let reloaded = manager.load_config(None).unwrap();

        assert_eq!(written.bar, reloaded.bar);
        assert_eq!(written.theme, reloaded.theme);
    }

    #[test]
    fn test_malformed_file_is_left_alone() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[bar\nposition = ").unwrap();

        let config = manager.load_config(None).unwrap();

        assert_eq!(config.bar.max_height, 40);
        assert_eq!(fs::read_to_string(&path).unwrap(), "[bar\nposition = ");
    }

    #[test]
    fn test_override_path_wins() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("unused"));
        let custom = dir.path().join("custom.toml");
        fs::write(&custom, "[bar]\nposition = \"bottom\"\n").unwrap();

        let config = manager.load_config(Some(&custom)).unwrap();

        assert_eq!(config.bar.position, BarPosition::Bottom);
        assert!(!manager.config_dir().exists());
    }
}
