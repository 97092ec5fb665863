use magshelf_core::import::parse_delimited;

use crate::app::AppContext;
use crate::cli::ImportArgs;
use crate::ui::{print, receipt};

use super::snapshot::{confirm_destructive, print_snapshot, write_safety_snapshot};

pub fn handle_import(ctx: &AppContext, args: &ImportArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", args.file, e))?;

    let mut catalog = ctx.open_catalog()?;
    let ui_ctx = ctx.ui_context(false, None);

    let Some(rows) = parse_delimited(&text) else {
        if !ctx.quiet() {
            print(
                &ui_ctx,
                &receipt(
                    &ui_ctx,
                    "No data rows found; catalog unchanged",
                    &[("Imported", "0"), ("Source", &args.file)],
                ),
            );
        }
        return Ok(());
    };

    let existing = catalog.count()?;
    let prompt = format!(
        "Replace all {} records with the contents of {}?",
        existing, args.file
    );
    if !confirm_destructive(ctx, &ui_ctx, &prompt, existing, args.yes)? {
        return Err(anyhow::anyhow!("Import cancelled"));
    }

    let snapshot = write_safety_snapshot(ctx, &catalog, "import")?;
    let imported = catalog.import_records(&rows)?;
    print_snapshot(ctx, &ui_ctx, snapshot.as_deref());

    if !ctx.quiet() {
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Imported records",
                &[("Imported", &imported.to_string()), ("Source", &args.file)],
            ),
        );
    }
    Ok(())
}
