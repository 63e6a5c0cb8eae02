//! Application settings persisted as a small JSON file.
//!
//! Stores the filter option flags and keeps unrecognized keys intact so that
//! values written by older versions (the legacy `filter_history` entry in
//! particular) survive until migration lifts them out.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::utils::atomic_write;

const SETTINGS_FILENAME: &str = "settings.json";

fn default_true() -> bool {
    true
}

/// Persisted option flags, plus a catch-all for keys this version does not
/// know about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    #[serde(default)]
    pub filter_regular_expression: bool,
    #[serde(default)]
    pub filter_case_insensitive: bool,
    #[serde(default = "default_true")]
    pub save_filter_history: bool,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            filter_regular_expression: false,
            filter_case_insensitive: false,
            save_filter_history: true,
            extra: BTreeMap::new(),
        }
    }
}

/// Handle on the main settings store.
#[derive(Debug)]
pub struct Settings {
    path: PathBuf,
    pub options: Options,
}

impl Settings {
    /// Load settings from `config_dir`, falling back to defaults when the
    /// file does not exist yet.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let path = config_dir.join(SETTINGS_FILENAME);
        let options = if path.exists() {
            let json = fs::read_to_string(&path).context("Failed to read settings file")?;
            serde_json::from_str(&json).context("Failed to parse settings JSON")?
        } else {
            Options::default()
        };
        Ok(Self { path, options })
    }

    pub fn save(&self) -> Result<()> {
        let json =
            serde_json::to_string_pretty(&self.options).context("Failed to serialize settings")?;
        atomic_write(&self.path, json.as_bytes())
    }

    /// Remove and return an unrecognized option, e.g. a legacy key being
    /// migrated away. The caller decides when to persist the removal.
    pub fn remove_option(&mut self, key: &str) -> Option<serde_json::Value> {
        self.options.extra.remove(key)
    }
}
