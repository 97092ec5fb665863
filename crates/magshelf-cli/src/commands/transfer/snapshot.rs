use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::info;

use magshelf_core::{Catalog, SqliteStore};

use crate::app::AppContext;
use crate::constants::SNAPSHOT_PREFIX;
use crate::ui::prompt::prompt_confirm;
use crate::ui::{badge, print, Badge, OutputMode, UiContext};

/// File name for a snapshot taken before `action`.
pub fn snapshot_file_name(action: &str) -> String {
    format!(
        "{}-{}-{}.json",
        SNAPSHOT_PREFIX,
        action,
        Utc::now().format("%Y%m%dT%H%M%S%3fZ")
    )
}

/// Back up the catalog before a destructive `action`.
///
/// Skipped when the catalog is empty or snapshots are disabled in config.
pub fn write_safety_snapshot(
    ctx: &AppContext,
    catalog: &Catalog<SqliteStore>,
    action: &str,
) -> anyhow::Result<Option<PathBuf>> {
    if !ctx.snapshot_before_destroy()? || catalog.count()? == 0 {
        return Ok(None);
    }

    let document = catalog.export_backup()?;
    let path = ctx.backups_dir()?.join(snapshot_file_name(action));
    magshelf_core::fs::write_atomic(&path, document.to_json_pretty()?.as_bytes()).map_err(|e| {
        anyhow::anyhow!("Failed to write safety snapshot {}: {}", path.display(), e)
    })?;
    info!(path = %path.display(), count = document.count, "wrote safety snapshot");
    Ok(Some(path))
}

/// Ask before replacing a non-empty catalog.
///
/// Returns `true` without prompting when `yes` is set, the catalog is
/// empty, or stdin is not a terminal.
pub fn confirm_destructive(
    ctx: &AppContext,
    ui_ctx: &UiContext,
    prompt: &str,
    record_count: usize,
    yes: bool,
) -> anyhow::Result<bool> {
    if yes || record_count == 0 || !ctx.interactive() {
        return Ok(true);
    }
    let proceed = prompt_confirm(prompt, false)?;
    if !proceed {
        match ui_ctx.mode {
            OutputMode::Pretty => print(ui_ctx, &badge(ui_ctx, Badge::Warn, "Cancelled")),
            OutputMode::Plain | OutputMode::Json => println!("status=cancelled"),
        }
    }
    Ok(proceed)
}

/// Report where a snapshot went, if one was written.
pub fn print_snapshot(ctx: &AppContext, ui_ctx: &UiContext, snapshot: Option<&Path>) {
    let Some(path) = snapshot else {
        return;
    };
    if ctx.quiet() {
        return;
    }
    match ui_ctx.mode {
        OutputMode::Pretty => print(
            ui_ctx,
            &badge(
                ui_ctx,
                Badge::Ok,
                &format!("Safety snapshot written to {}", path.display()),
            ),
        ),
        OutputMode::Plain | OutputMode::Json => println!("snapshot={}", path.display()),
    }
}
