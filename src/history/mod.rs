//! Filter-history persistence.
//!
//! Previously entered filter strings live in a dedicated small JSON file
//! (`filter-history.json`) next to the main settings, under the single key
//! `filter_history`. Early versions stored that key inside the main settings
//! file; [`HistoryStore::migrate_legacy`] moves it over exactly once.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::Settings;
use crate::utils::atomic_write;

const HISTORY_FILENAME: &str = "filter-history.json";
const OPTION_FILTER_HISTORY: &str = "filter_history";

/// Key-value store holding the ordered list of past filter strings.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn open(config_dir: &Path) -> Self {
        Self { path: config_dir.join(HISTORY_FILENAME) }
    }

    /// Read the saved history. A missing file is an empty history.
    pub fn load(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path).context("Failed to read filter history file")?;
        let mut map: BTreeMap<String, Vec<String>> =
            serde_json::from_str(&json).context("Failed to parse filter history JSON")?;
        Ok(map.remove(OPTION_FILTER_HISTORY).unwrap_or_default())
    }

    pub fn save(&self, entries: &[String]) -> Result<()> {
        let mut map = BTreeMap::new();
        map.insert(OPTION_FILTER_HISTORY, entries);
        let json =
            serde_json::to_string_pretty(&map).context("Failed to serialize filter history")?;
        atomic_write(&self.path, json.as_bytes())
    }

    /// Append one accepted filter string, keeping entries unique with the
    /// newest occurrence last.
    pub fn record(&self, entry: &str) -> Result<()> {
        if entry.is_empty() {
            return Ok(());
        }
        let mut entries = self.load()?;
        entries.retain(|existing| existing != entry);
        entries.push(entry.to_string());
        self.save(&entries)
    }

    pub fn clear(&self) -> Result<()> {
        self.save(&[])
    }

    /// Move a `filter_history` list left behind in the main settings store
    /// into this store.
    ///
    /// Current entries come first, legacy entries are appended, and the
    /// merged list is deduplicated keeping first occurrences. The legacy key
    /// is deleted even when it holds an empty list; calling this with no
    /// legacy key present is a no-op, so the migration is idempotent.
    pub fn migrate_legacy(&self, settings: &mut Settings) -> Result<()> {
        let Some(value) = settings.remove_option(OPTION_FILTER_HISTORY) else {
            return Ok(());
        };

        let legacy: Vec<String> = serde_json::from_value(value).unwrap_or_default();
        if !legacy.is_empty() {
            let mut merged = self.load()?;
            merged.extend(legacy);
            self.save(&dedup_stable(merged))?;
        }

        settings.save()
    }
}

/// Remove duplicates, keeping the first occurrence of each entry.
fn dedup_stable(entries: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::BTreeSet::new();
    entries.into_iter().filter(|entry| seen.insert(entry.clone())).collect()
}
