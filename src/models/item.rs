use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One clipboard history entry.
///
/// `display_text` is the flattened text shown in the item list (usually the
/// `text/plain` content). `formats` maps data-format names to their stored
/// content; format *names* are what slash-qualified filters match against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipItem {
    pub display_text: String,
    #[serde(default)]
    pub formats: BTreeMap<String, String>,
    pub timestamp: DateTime<Utc>,
}

impl ClipItem {
    /// Create a plain-text item carrying only the `text/plain` format.
    pub fn text(text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        let display_text = text.into();
        let mut formats = BTreeMap::new();
        formats.insert("text/plain".to_string(), display_text.clone());
        Self { display_text, formats, timestamp }
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn formats(&self) -> &BTreeMap<String, String> {
        &self.formats
    }
}

/// Load a saved item list (JSON array, newest first).
pub fn read_items(path: &Path) -> Result<Vec<ClipItem>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read items file {}", path.display()))?;
    serde_json::from_str(&json).context("Failed to parse items JSON")
}
