//! Application context for the Magshelf CLI.
//!
//! Bundles the parsed arguments with the lazily-loaded config file so
//! handlers don't re-read it or thread paths around.

use std::io::IsTerminal;
use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use magshelf_core::storage::SqliteStore;
use magshelf_core::Catalog;

use crate::cli::Cli;
use crate::config::{read_config, MagshelfConfig};
use crate::errors::CliError;
use crate::ui::UiContext;

use super::resolver::{
    missing_catalog_message, resolve_backups_dir, resolve_catalog_path, resolve_config_path,
};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<MagshelfConfig>>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Build the UI context for a command's output flags.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format)
    }

    /// Whether prompts can be shown (stdin is a terminal).
    pub fn interactive(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    /// The config file, if one exists. Loaded once.
    pub fn config(&self) -> anyhow::Result<Option<&MagshelfConfig>> {
        let config = self.config.get_or_try_init(|| -> anyhow::Result<_> {
            let path = resolve_config_path()?;
            if path.exists() {
                Ok(Some(read_config(&path)?))
            } else {
                Ok(None)
            }
        })?;
        Ok(config.as_ref())
    }

    pub fn catalog_path(&self) -> anyhow::Result<PathBuf> {
        resolve_catalog_path(self.cli, self.config()?)
    }

    pub fn backups_dir(&self) -> anyhow::Result<PathBuf> {
        resolve_backups_dir(self.config()?)
    }

    /// Whether destructive commands write a safety snapshot first.
    pub fn snapshot_before_destroy(&self) -> anyhow::Result<bool> {
        Ok(self
            .config()?
            .map_or(true, |config| config.backups.snapshot_before_destroy))
    }

    /// Open the existing catalog database.
    ///
    /// A missing database file is reported with a hint to run `magshelf init`
    /// rather than silently created.
    pub fn open_catalog(&self) -> anyhow::Result<Catalog<SqliteStore>> {
        let path = self.catalog_path()?;
        if !path.exists() {
            return Err(CliError::not_found(
                missing_catalog_message(&path),
                "Hint: Run `magshelf init` to create the catalog.",
            )
            .into());
        }
        Ok(Catalog::init(&path)?)
    }
}
