//! Global configuration (`~/.config/vault-architect/config.toml`).

use crate::error::{ArchitectError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "VAULT_ARCHITECT_CONFIG";

/// User-level configuration shared by every vault.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Vault used when `--vault` is not given.
    pub default_vault: Option<PathBuf>,
}

impl Config {
    /// Location of the config file, if one can be determined.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("vault-architect").join("config.toml"))
    }

    /// Load the config file. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load the config from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| ArchitectError::ConfigError(format!("{}: {}", path.display(), e)))
    }

    /// Pick the vault root: CLI flag, then `default_vault`, then the current directory.
    pub fn resolve_vault_path(&self, cli_vault: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = cli_vault {
            return Ok(expand_home(path));
        }
        if let Some(ref path) = self.default_vault {
            return Ok(expand_home(path));
        }
        Ok(std::env::current_dir()?)
    }
}

/// Expand a leading `~` to the home directory.
fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
