//! Client configuration.

use std::path::{Path, PathBuf};

use config::{Environment, File};
use serde::Deserialize;

use crate::error::{ClientError, ClientResult};

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

const ENV_PREFIX: &str = "EVENTSPHERE";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Configuration at ~/.config/eventsphere/config.toml
///
/// Every key can also be set through an `EVENTSPHERE_<KEY>` environment
/// variable, which wins over the file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the backend REST API, including the `/api` prefix.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Where the session token is persisted. Defaults to the platform data
    /// directory.
    #[serde(default)]
    pub session_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: default_api_url(),
            session_file: None,
        }
    }
}

impl Config {
    pub fn config_path() -> ClientResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ClientError::Config("Could not determine config directory".into()))?
            .join("eventsphere");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config, writing a commented default file on first run.
    pub fn load() -> ClientResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> ClientResult<Self> {
        config::Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| ClientError::Config(e.to_string()))
    }

    /// Resolved location of the session file, with `~` expanded.
    pub fn session_path(&self) -> ClientResult<PathBuf> {
        match &self.session_file {
            Some(path) => {
                let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
                Ok(PathBuf::from(expanded))
            }
            None => {
                let data_dir = dirs::data_dir().ok_or_else(|| {
                    ClientError::Config("Could not determine data directory".into())
                })?;
                Ok(data_dir.join("eventsphere").join("session.toml"))
            }
        }
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ClientResult<()> {
        let contents = format!(
            "\
# eventsphere configuration

# Backend REST API:
# api_url = \"{}\"

# Where the login token is kept:
# session_file = \"~/.local/share/eventsphere/session.toml\"
",
            DEFAULT_API_URL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClientError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ClientError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        Config::create_default_config(&path).unwrap();
        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.session_file, None);
        assert!(!config.api_url.is_empty());
    }

    #[test]
    fn session_file_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let session = dir.path().join("token.toml");
        std::fs::write(
            &path,
            format!("session_file = \"{}\"\n", session.display()),
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.session_path().unwrap(), session);
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.session_file, None);
    }
}
