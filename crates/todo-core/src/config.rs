use crate::{TodoError, TodoResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Key under which the task list is stored unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "todos";

const DEFAULT_NOTICE_TTL_MS: u64 = 2000;

fn default_notice_ttl_ms() -> u64 {
    DEFAULT_NOTICE_TTL_MS
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the persisted list. Falls back to the platform data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// How long a notice stays visible, in milliseconds.
    #[serde(default = "default_notice_ttl_ms")]
    pub notice_ttl_ms: u64,

    #[serde(default)]
    pub storage_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            notice_ttl_ms: DEFAULT_NOTICE_TTL_MS,
            storage_key: None,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/todo/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("todo/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("todo\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user config, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match Self::from_file(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!(
                            "Ignoring config at {}: {}",
                            config_path.display(),
                            e
                        );
                    }
                }
            }
        }
        Self::default()
    }

    pub fn from_file(path: &Path) -> TodoResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| TodoError::Config(e.to_string()))
    }

    pub fn effective_data_dir(&self) -> TodoResult<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join("todo"))
            .ok_or_else(|| TodoError::Config("no data directory available".to_string()))
    }

    pub fn effective_storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY)
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.notice_ttl_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.effective_storage_key(), "todos");
        assert_eq!(config.notice_ttl(), Duration::from_secs(2));
        assert!(config.data_dir.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "data_dir = \"/tmp/todo-test\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/todo-test")));
        assert_eq!(config.notice_ttl_ms, 2000);
        assert_eq!(config.effective_storage_key(), "todos");
    }

    #[test]
    fn test_custom_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "notice_ttl_ms = 500\nstorage_key = \"work\"").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.notice_ttl(), Duration::from_millis(500));
        assert_eq!(config.effective_storage_key(), "work");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "notice_ttl_ms = \"soon\"").unwrap();

        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, TodoError::Config(_)));
    }

    #[test]
    fn test_explicit_data_dir_wins() {
        let config = AppConfig {
            data_dir: Some(PathBuf::from("/srv/todo")),
            ..AppConfig::default()
        };
        assert_eq!(
            config.effective_data_dir().unwrap(),
            PathBuf::from("/srv/todo")
        );
    }
}
