use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_ADDRESS, DEFAULT_LOGIN_DELAY_MS, DEFAULT_LOG_FILE,
};

/// User-tunable settings, read from `~/.lumina/config.yaml`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated latency of a credentials submission
    pub login_delay_ms: u64,
    /// Address shown in the browser chrome
    pub address: String,
    pub log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
            address: String::from(DEFAULT_ADDRESS),
            log_file: String::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults.
    ///
    /// A missing file is normal. A file that cannot be read or parsed yields
    /// the defaults together with the error, for the caller to report once
    /// logging is up.
    pub fn load() -> (Self, Option<anyhow::Error>) {
        match Self::default_path() {
            Some(path) => Self::load_at(&path),
            None => (Config::default(), None),
        }
    }

    pub fn load_at(path: &Path) -> (Self, Option<anyhow::Error>) {
        if !path.exists() {
            return (Config::default(), None);
        }

        match Self::load_from(path) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.login_delay(), Duration::from_millis(1500));
        assert_eq!(config.address, "lumina.io/auth-secure");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "login_delay_ms: 250").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.login_delay_ms, 250);
        assert_eq!(config.address, DEFAULT_ADDRESS);
        assert_eq!(config.log_file, DEFAULT_LOG_FILE);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "login_delay_ms: [not a number").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_load_at_missing_file_uses_defaults_silently() {
        let dir = tempdir().unwrap();
        let (config, error) = Config::load_at(&dir.path().join("config.yaml"));
        assert_eq!(config, Config::default());
        assert!(error.is_none());
    }

    #[test]
    fn test_load_at_malformed_file_uses_defaults_and_reports() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "address: [unterminated").unwrap();

        let (config, error) = Config::load_at(&path);
        assert_eq!(config, Config::default());
        let message = format!("{:#}", error.unwrap());
        assert!(message.contains("parsing"), "{}", message);
    }

    #[test]
    fn test_load_at_valid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "login_delay_ms: 10\naddress: example.test\n").unwrap();

        let (config, error) = Config::load_at(&path);
        assert!(error.is_none());
        assert_eq!(config.login_delay_ms, 10);
        assert_eq!(config.address, "example.test");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(Config::load_from(&dir.path().join("absent.yaml")).is_err());
    }
}
