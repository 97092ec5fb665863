use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct MagshelfConfig {
    pub catalog: CatalogSection,
    #[serde(default)]
    pub backups: BackupsSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogSection {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BackupsSection {
    /// Where safety snapshots are written; `backups/` under the XDG data directory when unset
    pub directory: Option<String>,
    #[serde(default = "default_snapshot_before_destroy")]
    pub snapshot_before_destroy: bool,
}

impl Default for BackupsSection {
    fn default() -> Self {
        Self {
            directory: None,
            snapshot_before_destroy: default_snapshot_before_destroy(),
        }
    }
}

fn default_snapshot_before_destroy() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LogSection {
    /// tracing filter directive, e.g. "info" or "magshelf_core=debug"
    pub level: Option<String>,
}

impl MagshelfConfig {
    pub fn new(catalog_path: PathBuf, backups_directory: PathBuf) -> Self {
        Self {
            catalog: CatalogSection {
                path: catalog_path.to_string_lossy().to_string(),
            },
            backups: BackupsSection {
                directory: Some(backups_directory.to_string_lossy().to_string()),
                snapshot_before_destroy: true,
            },
            log: LogSection {
                level: Some("warn".to_string()),
            },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_catalog_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("catalog.db"))
}

pub fn default_backups_dir() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("backups"))
}

pub fn read_config(path: &Path) -> anyhow::Result<MagshelfConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &MagshelfConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("magshelf"));
        }
    }
    Ok(home_dir()?.join(".config").join("magshelf"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("magshelf"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("magshelf"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
