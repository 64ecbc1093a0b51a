//! Settings - backend location, title and runtime knobs
//!
//! Layered: built-in defaults, then `~/.tiledash/config.yaml`, then
//! environment variables, then the first CLI argument (base URL).

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_LOG_FILE, DEFAULT_TIMEOUT_SECS, DEFAULT_TITLE};

const CONFIG_FILE: &str = "config.yaml";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub dashboard_title: String,
    pub request_timeout_secs: u64,
    pub log_file: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            base_url: String::from(DEFAULT_BASE_URL),
            dashboard_title: String::from(DEFAULT_TITLE),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Settings {
    /// Load settings from every layer
    pub fn load(cli_base_url: Option<String>) -> Result<Self> {
        let mut settings = match config_dir() {
            Some(dir) => Self::from_dir(&dir)?,
            None => Self::default(),
        };
        settings.apply_env(|key| std::env::var(key).ok())?;
        if let Some(url) = cli_base_url {
            settings.base_url = url;
        }
        settings.validate()?;
        Ok(settings)
    }

    /// Read `config.yaml` from `dir`, falling back to defaults when absent
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        settings
            .validate()
            .with_context(|| format!("invalid {}", path.display()))?;
        Ok(settings)
    }

    /// Override fields from environment-style lookups. A malformed or zero
    /// timeout is an error.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup("TILEDASH_BASE_URL") {
            self.base_url = url;
        }
        if let Some(title) = lookup("TILEDASH_TITLE").or_else(|| lookup("DASHBOARD_TITLE")) {
            self.dashboard_title = title;
        }
        if let Some(secs) = lookup("TILEDASH_TIMEOUT_SECS") {
            self.request_timeout_secs = secs
                .trim()
                .parse()
                .with_context(|| format!("TILEDASH_TIMEOUT_SECS={:?} is not a number of seconds", secs))?;
        }
        self.validate().context("TILEDASH_TIMEOUT_SECS")
    }

    /// A zero timeout would fail every request immediately
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be at least 1");
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".tiledash"))
}
