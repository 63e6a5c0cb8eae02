use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Environment override for the configuration directory, mainly for tests
/// and portable installs.
pub const CONFIG_DIR_ENV: &str = "CLIPFIND_CONFIG_DIR";

/// Resolve the application configuration directory, creating it if missing.
///
/// `CLIPFIND_CONFIG_DIR` wins when set; otherwise the platform config dir
/// (`~/.config/clipfind` on Linux) is used.
pub fn config_dir() -> Result<PathBuf> {
    let dir = match env::var_os(CONFIG_DIR_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::config_dir()
            .context("Failed to get platform configuration directory")?
            .join("clipfind"),
    };

    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {}", dir.display()))?;
    }

    Ok(dir)
}

/// Write `bytes` to `path` via a temp file in the same directory plus rename,
/// so readers never observe a half-written file.
pub fn atomic_write(path: &Path, bytes: &[u8]) -> Result<()> {
    let file_name =
        path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    let temp_path = path.with_file_name(format!("{file_name}.tmp"));

    fs::write(&temp_path, bytes)
        .with_context(|| format!("Failed to write temp file {}", temp_path.display()))?;
    fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temp file into {}", path.display()))?;
    Ok(())
}
