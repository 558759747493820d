use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub fn cadence_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".cadence"))
}

pub fn ensure_cadence_home() -> Result<PathBuf> {
    let dir = cadence_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

/// Markdown action list used when `classify` gets no titles.
pub fn actions_path() -> Result<PathBuf> {
    Ok(cadence_home()?.join("actions.md"))
}

/// Snapshot file used when `agenda` gets no `--file`.
pub fn snapshots_path() -> Result<PathBuf> {
    Ok(cadence_home()?.join("snapshots.json"))
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}
