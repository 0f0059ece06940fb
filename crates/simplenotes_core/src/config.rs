//! Runtime configuration.
//!
//! # Responsibility
//! - Provide defaults for storage location, storage key, search delay and
//!   logging.
//! - Load overrides from an optional JSON file.
//!
//! # Invariants
//! - Fields missing from the file fall back to their defaults.
//! - A loaded config has passed `validate()`.

use crate::logging::default_log_level;
use crate::repo::note_store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_DIR_NAME: &str = "simplenotes";
const DB_FILE_NAME: &str = "notes.sqlite3";
const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 200;

/// Configuration load/validation error.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    Invalid(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid config `{}`: {source}", path.display())
            }
            Self::Invalid(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid(_) => None,
        }
    }
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// Key the note collection is stored under.
    pub storage_key: String,
    /// SQLite file backing the key-value store. `None` keeps notes in memory.
    pub db_path: Option<PathBuf>,
    /// Delay between the last search keystroke and filtering.
    pub search_debounce_ms: u64,
    pub log_level: String,
    /// Directory for rolling log files; logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            db_path: default_db_path(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl NotesConfig {
    /// Reads a JSON config file and validates it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be blank"));
        }
        if self.search_debounce_ms == 0 {
            return Err(ConfigError::Invalid("search_debounce_ms must be positive"));
        }
        Ok(())
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// Default database location under the platform's local data directory.
pub fn default_db_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR_NAME).join(DB_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, NotesConfig};
    use crate::repo::note_store::DEFAULT_STORAGE_KEY;
    use std::io::Write;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"search_debounce_ms": 350}}"#).expect("write config");

        let config = NotesConfig::load(file.path()).expect("config should load");
        assert_eq!(config.search_debounce_ms, 350);
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn blank_storage_key_is_rejected() {
        let config = NotesConfig {
            storage_key: "  ".to_string(),
            ..NotesConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn malformed_file_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write config");

        let err = NotesConfig::load(file.path()).expect_err("parse should fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
