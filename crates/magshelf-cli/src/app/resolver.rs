//! Path resolution for config, catalog, and backup locations.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_backups_dir, default_catalog_path, default_config_path, MagshelfConfig};

/// Resolve the config file path, checking MAGSHELF_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("MAGSHELF_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the catalog database path: `--db`/MAGSHELF_DB, then config, then the XDG default.
pub fn resolve_catalog_path(cli: &Cli, config: Option<&MagshelfConfig>) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.db.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(config) = config {
        if !config.catalog.path.trim().is_empty() {
            return Ok(PathBuf::from(&config.catalog.path));
        }
    }
    default_catalog_path()
}

/// Directory for safety snapshots: config, then the XDG default.
pub fn resolve_backups_dir(config: Option<&MagshelfConfig>) -> anyhow::Result<PathBuf> {
    match config.and_then(|c| c.backups.directory.as_deref()) {
        Some(dir) if !dir.trim().is_empty() => Ok(PathBuf::from(dir)),
        _ => default_backups_dir(),
    }
}

/// Error message when the catalog database is missing.
pub fn missing_catalog_message(path: &Path) -> String {
    format!(
        "No catalog found at {}\n\nRun:\n  magshelf init\n\nOr specify a catalog path:\n  MAGSHELF_DB=/path/to/catalog.db magshelf init",
        path.display()
    )
}
