//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{TimeZone, Utc};
use clipfind::ClipItem;
use tempfile::TempDir;

/// Builder for a temporary config directory plus items file, as the CLI and
/// the stores expect them on disk.
pub struct WorkspaceBuilder {
    temp_dir: TempDir,
    items: Vec<ClipItem>,
}

impl WorkspaceBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir, items: Vec::new() }
    }

    pub fn config_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a plain-text item; items are listed newest first, so the first
    /// call produces row 0.
    pub fn with_text_item(mut self, text: &str) -> Self {
        let n = self.items.len() as u32;
        let timestamp = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
            - chrono::Duration::minutes(n as i64);
        self.items.push(ClipItem::text(text, timestamp));
        self
    }

    /// Add an item with an explicit format map.
    pub fn with_item(mut self, text: &str, formats: &[(&str, &str)]) -> Self {
        let map: BTreeMap<String, String> =
            formats.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        self.items.push(ClipItem {
            display_text: text.to_string(),
            formats: map,
            timestamp: Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
        });
        self
    }

    /// Write the main settings file verbatim.
    pub fn with_settings(self, json: &str) -> Self {
        fs::write(self.temp_dir.path().join("settings.json"), json)
            .expect("Failed to write settings.json");
        self
    }

    /// Write the item list and return its path.
    pub fn write_items(&self) -> PathBuf {
        let path = self.temp_dir.path().join("items.json");
        let json = serde_json::to_string_pretty(&self.items).expect("Failed to serialize items");
        fs::write(&path, json).expect("Failed to write items.json");
        path
    }
}

pub fn test_item(text: &str) -> ClipItem {
    ClipItem::text(text, Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap())
}
