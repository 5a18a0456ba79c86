//! Configuration file loading
//!
//! Reads the `[copr-cli]` section of INI-style `copr` files found on the
//! XDG configuration search path and merges them into a [`Configuration`].

use config::{Config, File, FileFormat};
use copr_core::Configuration;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File name looked up in every configuration directory
pub const CONFIG_FILE_NAME: &str = "copr";
const DEFAULT_CONFIG_DIRS: &str = "/etc/xdg";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: config::ConfigError,
    },
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(rename = "copr-cli", default)]
    copr_cli: Section,
}

#[derive(Debug, Default, Deserialize)]
struct Section {
    copr_url: Option<String>,
    login: Option<String>,
    token: Option<String>,
}

/// Locates and merges configuration files
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_home: Option<PathBuf>,
    config_dirs: Vec<PathBuf>,
}

impl ConfigLoader {
    pub fn new(config_home: Option<PathBuf>, config_dirs: Vec<PathBuf>) -> Self {
        Self {
            config_home,
            config_dirs,
        }
    }

    /// Search path from `XDG_CONFIG_HOME` / `XDG_CONFIG_DIRS`
    ///
    /// Unset or empty variables fall back to `$HOME/.config` and `/etc/xdg`.
    pub fn from_env() -> Self {
        let config_home = non_empty_env("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".config"))
            });

        let config_dirs = non_empty_env("XDG_CONFIG_DIRS")
            .unwrap_or_else(|| DEFAULT_CONFIG_DIRS.to_string())
            .split(':')
            .map(PathBuf::from)
            .collect();

        Self::new(config_home, config_dirs)
    }

    /// Existing configuration files, lowest precedence first
    ///
    /// System directories come first (the first listed directory last among
    /// them), the user's own file last. Relative directories are ignored.
    pub fn search_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self
            .config_home
            .iter()
            .chain(self.config_dirs.iter())
            .filter(|base| base.is_absolute())
            .map(|base| base.join(CONFIG_FILE_NAME))
            .filter(|path| path.is_file())
            .collect();

        paths.reverse();
        paths
    }

    /// Load configuration from `custom_path` only, or else from the search path
    ///
    /// # Errors
    /// - ConfigError::Load if a file cannot be read or parsed
    pub fn load(&self, custom_path: Option<&Path>) -> Result<Configuration, ConfigError> {
        let paths = match custom_path {
            Some(path) => vec![path.to_path_buf()],
            None => self.search_paths(),
        };

        let mut configuration = Configuration::default();
        for path in &paths {
            debug!(path = %path.display(), "Reading Copr configuration");

            let section = read_section(path).map_err(|source| ConfigError::Load {
                path: path.clone(),
                source,
            })?;

            if let Some(url) = section.copr_url {
                configuration.set_url(url);
            }
            if let Some(login) = section.login {
                configuration.set_login(Some(login));
            }
            if let Some(token) = section.token {
                configuration.set_token(Some(token));
            }
        }

        Ok(configuration)
    }
}

fn read_section(path: &Path) -> Result<Section, config::ConfigError> {
    let file: ConfigFile = Config::builder()
        .add_source(File::from(path).format(FileFormat::Ini).required(true))
        .build()?
        .try_deserialize()?;
    Ok(file.copr_cli)
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}
