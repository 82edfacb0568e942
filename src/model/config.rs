use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const CONFIG_DIR: &str = ".jcrsh";
const CONFIG_FILE: &str = "config.json";

/// Client settings, read from `~/.jcrsh/config.json` and overridden by flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// REST root of the shell service, e.g. `http://localhost:8080/jcr-shell/rest`.
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// Values given on the command line; these win over the config file.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub config: Option<PathBuf>,
    pub base_url: Option<String>,
    pub start_path: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl ClientConfig {
    pub fn read(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn default_path() -> Option<PathBuf> {
        std::env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Explicit `--config` must exist; the default location is optional.
    pub fn load(overrides: &ConfigOverrides) -> Result<Self> {
        let mut cfg = match &overrides.config {
            Some(path) => Self::read(path)?,
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::read(&path)?,
                _ => Self::default(),
            },
        };
        cfg.apply(overrides);
        Ok(cfg)
    }

    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(url) = &overrides.base_url {
            self.base_url = Some(url.clone());
        }
        if let Some(path) = &overrides.start_path {
            self.start_path = Some(path.clone());
        }
        if let Some(file) = &overrides.log_file {
            self.log_file = Some(file.clone());
        }
    }

    pub fn require_base_url(&self) -> Result<String> {
        let url = self
            .base_url
            .as_deref()
            .map(|u| u.trim().trim_end_matches('/'))
            .filter(|u| !u.is_empty())
            .context("no server configured (pass `--url http://host:port/jcr-shell/rest` or set base_url in ~/.jcrsh/config.json)")?;
        Ok(url.to_string())
    }

    pub fn start_path(&self) -> &str {
        self.start_path.as_deref().unwrap_or("/")
    }
}

#[cfg(test)]
#[path = "../tests/model/config_tests.rs"]
mod tests;
