use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    /// How long a write waits on a database locked by another connection
    /// before failing.
    pub busy_timeout_ms: u64,
}

impl StoreConfig {
    /// Loads a TOML config file. Keys missing from the file keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| {
            Error::Config(format!("{}: {}", path.as_ref().display(), e.message()))
        })
    }

    #[must_use]
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("prlabels.db")
    }

    #[must_use]
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            busy_timeout_ms: 5000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prlabels.toml");
        std::fs::write(&path, "data_dir = \"/var/lib/prlabels\"\n").unwrap();

        let config = StoreConfig::load(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/prlabels"));
        assert_eq!(config.busy_timeout_ms, 5000);
        assert_eq!(
            config.db_path(),
            PathBuf::from("/var/lib/prlabels/prlabels.db")
        );
    }

    #[test]
    fn test_load_rejects_bad_types() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prlabels.toml");
        std::fs::write(&path, "busy_timeout_ms = \"soon\"\n").unwrap();

        let result = StoreConfig::load(&path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let result = StoreConfig::load(temp.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
