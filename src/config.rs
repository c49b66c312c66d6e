/// Configuration Module
///
/// Optional TOML configuration for connection coordinates the command line
/// does not carry. Looked up at `~/.config/hotelsql/config.toml`; a missing
/// file simply yields the defaults.
use crate::core::{HotelSqlError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Connection settings parsed from the config file.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Database server host
    pub host: String,
    /// Login password; empty means none is sent
    pub password: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "localhost".to_string(),
            password: String::new(),
        }
    }
}

/// Returns the per-user config file path, if a config directory exists.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hotelsql").join("config.toml"))
}

/// Loads configuration from the per-user config file, falling back to the
/// defaults when no file is present.
///
/// # Errors
///
/// Returns `HotelSqlError::Config` when a file exists but cannot be read or
/// parsed.
pub fn load() -> Result<Config> {
    match config_path() {
        Some(path) if path.exists() => load_from(&path),
        _ => Ok(Config::default()),
    }
}

/// Loads configuration from a TOML file at the given path.
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content =
        fs::read_to_string(path).map_err(|e| HotelSqlError::Config(e.to_string()))?;
    toml::from_str(&content).map_err(|e| HotelSqlError::Config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.password, "");
    }

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(
            r#"
host = "db.example.com"
password = "hunter2"
"#,
        )
        .expect("Failed to parse sample config");
        assert_eq!(config.host, "db.example.com");
        assert_eq!(config.password, "hunter2");
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config: Config = toml::from_str(r#"host = "10.0.0.5""#).unwrap();
        assert_eq!(config.host, "10.0.0.5");
        assert_eq!(config.password, "");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "host = \"127.0.0.1\"").unwrap();
        let config = load_from(file.path()).unwrap();
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "host = [not toml").unwrap();
        match load_from(file.path()) {
            Err(HotelSqlError::Config(_)) => {}
            other => panic!("Expected Config error, got {other:?}"),
        }
    }
}
