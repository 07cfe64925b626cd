use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable that points at an alternative config file.
pub const CONFIG_PATH_ENV: &str = "PWSH_LOGIN_CONFIG";

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
    /// Returns the path to the configuration file.
    ///
    /// `$PWSH_LOGIN_CONFIG` if set, otherwise `pwsh-login/config.toml`
    /// under `dirs::config_dir()`. Falls back to the current directory if
    /// config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
            return PathBuf::from(path);
        }
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pwsh-login").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_owned(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_owned(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The guard variable name is non-empty and a legal environment key
    /// - The shell override, if any, is an absolute path
    pub fn validate(&self) -> Result<(), ConfigError> {
        let guard = &self.login.guard_var;
        if guard.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "login.guard_var must not be empty".to_string(),
            });
        }
        if guard.contains('=') || guard.contains('\0') {
            return Err(ConfigError::ValidationError {
                message: format!("login.guard_var '{}' is not a valid environment variable name", guard),
            });
        }

        if let Some(shell) = &self.login.shell {
            if !shell.is_absolute() {
                return Err(ConfigError::ValidationError {
                    message: format!("login.shell '{}' must be an absolute path", shell.display()),
                });
            }
        }

        Ok(())
    }
}
