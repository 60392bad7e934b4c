//! Configuration loading and context resolution
//!
//! Settings are read once at startup and passed by reference. Resolution
//! order for the vault directory:
//! 1. `--vault` flag
//! 2. `JOURNAL_SYNC_VAULT` environment variable
//! 3. `vault` key in the config file
//! 4. Current directory

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::Deserialize;

use crate::constants as C;
use crate::error::{SyncError, SyncResult};

/// User configuration, `config.yaml`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Vault directory holding the `Journal/` tree
    pub vault: Option<PathBuf>,
    /// Days searched backward for the previous entry
    pub lookback_days: u32,
    /// flexi_logger spec, e.g. `info` or `journal_sync=debug`
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vault: None,
            lookback_days: C::LOOKBACK_DAYS,
            log_level: None,
        }
    }
}

impl Config {
    /// `<config_dir>/journal-sync/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(C::CONFIG_DIR_NAME).join(C::CONFIG_FILE_NAME))
    }

    /// Load from an explicit path, or from the default location.
    ///
    /// An explicit file must exist; a missing default file yields defaults.
    pub fn load(explicit: Option<&Path>) -> SyncResult<Self> {
        match explicit {
            Some(path) => Self::load_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::load_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load and parse a YAML config file
    pub fn load_file(path: &Path) -> SyncResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| SyncError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_yaml(path, &content)
    }

    /// Parse YAML config content; an empty document means defaults
    pub fn from_yaml(path: &Path, content: &str) -> SyncResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content).map_err(|e| SyncError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        if config.lookback_days > C::MAX_LOOKBACK_DAYS {
            return Err(SyncError::Config {
                path: path.to_path_buf(),
                message: format!(
                    "lookback_days {} exceeds the maximum of {}",
                    config.lookback_days,
                    C::MAX_LOOKBACK_DAYS
                ),
            });
        }
        Ok(config)
    }

    /// Resolve the vault directory from flag, environment, config and cwd
    pub fn resolve_vault(&self, flag: Option<&Path>) -> PathBuf {
        let env_vault = std::env::var(C::ENV_VAULT).ok().filter(|s| !s.is_empty());
        self.resolve_vault_with(flag, env_vault.as_deref())
    }

    fn resolve_vault_with(&self, flag: Option<&Path>, env_vault: Option<&str>) -> PathBuf {
        if let Some(path) = flag {
            return path.to_path_buf();
        }
        if let Some(path) = env_vault {
            return PathBuf::from(path);
        }
        if let Some(ref path) = self.vault {
            return expand_home(path);
        }
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

/// Expand a leading `~` to the home directory
fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> SyncResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), C::DATE_INPUT_FORMAT)
        .map_err(|_| SyncError::InvalidDate(value.to_string()))
}

/// Resolve "today": explicit flag, then `JOURNAL_SYNC_TODAY`, then the
/// local clock
pub fn resolve_today(flag: Option<&str>) -> SyncResult<NaiveDate> {
    if let Some(value) = flag {
        return parse_date(value);
    }
    match std::env::var(C::ENV_TODAY) {
        Ok(value) if !value.is_empty() => parse_date(&value),
        _ => Ok(Local::now().date_naive()),
    }
}
