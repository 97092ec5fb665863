use magshelf_core::import::parse_backup;

use crate::app::AppContext;
use crate::cli::RestoreArgs;
use crate::ui::{print, receipt};

use super::snapshot::{confirm_destructive, print_snapshot, write_safety_snapshot};

pub fn handle_restore(ctx: &AppContext, args: &RestoreArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", args.file, e))?;

    let mut catalog = ctx.open_catalog()?;
    let ui_ctx = ctx.ui_context(false, None);

    // Malformed backups fail here, before any prompt or snapshot.
    let entries = parse_backup(&text)?;
    if entries.is_empty() {
        if !ctx.quiet() {
            print(
                &ui_ctx,
                &receipt(
                    &ui_ctx,
                    "Backup is empty; catalog unchanged",
                    &[("Restored", "0"), ("Source", &args.file)],
                ),
            );
        }
        return Ok(());
    }

    let existing = catalog.count()?;
    let prompt = format!(
        "Replace all {} records with the backup in {}?",
        existing, args.file
    );
    if !confirm_destructive(ctx, &ui_ctx, &prompt, existing, args.yes)? {
        return Err(anyhow::anyhow!("Restore cancelled"));
    }

    let snapshot = write_safety_snapshot(ctx, &catalog, "restore")?;
    let restored = catalog.restore_records(&entries)?;
    print_snapshot(ctx, &ui_ctx, snapshot.as_deref());

    if !ctx.quiet() {
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Restored records",
                &[("Restored", &restored.to_string()), ("Source", &args.file)],
            ),
        );
    }
    Ok(())
}
