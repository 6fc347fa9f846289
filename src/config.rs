// SPDX-License-Identifier: PMPL-1.0-or-later

//! Settings file for the command-line front end.
//!
//! ```yaml
//! store: /home/me/.local/share/dashboard-locale/store.json
//! catalog: ./catalog.json   # optional, replaces the built-in catalog
//! log_level: debug          # off | error | warn | info | debug | trace
//! ```
//!
//! Every field is optional. The file itself is optional too: when the default
//! location has no file, built-in defaults apply.

use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const APP_DIR: &str = "dashboard-locale";
const CONFIG_FILE: &str = "settings.yaml";
const STORE_FILE: &str = "store.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub store: Option<PathBuf>,
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Settings {
    /// Store file to use: the configured one, else the per-user data dir.
    pub fn store_path(&self) -> PathBuf {
        self.store.clone().unwrap_or_else(default_store_path)
    }

    /// Configured log level, `warn` when unset or unrecognised.
    pub fn level(&self) -> LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|raw| LevelFilter::from_str(raw.trim()).ok())
            .unwrap_or(LevelFilter::Warn)
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR).join(STORE_FILE))
        .unwrap_or_else(|| PathBuf::from(STORE_FILE))
}

/// Load settings from `path`, or from the default location when `None`.
///
/// An explicitly named file must exist; a missing default file is not an error.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => load_from_path(path),
        None => match default_config_path() {
            Some(path) if path.exists() => load_from_path(&path),
            _ => Ok(Settings::default()),
        },
    }
}

pub fn load_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings {}", path.display()))?;
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse settings {}", path.display()))
}
