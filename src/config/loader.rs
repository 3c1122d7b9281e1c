use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Loads configuration from `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Config::default());
        };

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Checks values serde cannot rule out on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "source.endpoint must not be empty".to_string(),
            });
        }
        if self.store.buffer_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "store.buffer_size must be greater than 0".to_string(),
            });
        }
        if self.view.page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "view.page_size must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_no_path_gives_defaults() {
        let config = Config::load(None).unwrap();

        assert_eq!(config.source.endpoint, "https://jsonplaceholder.typicode.com/users");
        assert_eq!(config.source.connect_timeout_seconds, 5);
        assert_eq!(config.source.timeout_seconds, None);
        assert_eq!(config.store.buffer_size, 32);
        assert_eq!(config.view.page_size, 5);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let file = write_config("[view]\npage_size = 10\n\n[source]\ntimeout_seconds = 3\n");
        let config = Config::load(Some(file.path())).unwrap();

        assert_eq!(config.view.page_size, 10);
        assert_eq!(config.source.timeout_seconds, Some(3));
        assert_eq!(config.store.buffer_size, 32);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let file = write_config("[view]\npage_size = 0\n");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let file = write_config("[store\nbuffer_size = ");
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = Config::load(Some(Path::new("/nonexistent/profile-manager.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
