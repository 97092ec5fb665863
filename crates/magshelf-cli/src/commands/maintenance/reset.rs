use crate::app::AppContext;
use crate::cli::ResetArgs;
use crate::commands::transfer::{confirm_destructive, print_snapshot, write_safety_snapshot};
use crate::ui::{print, receipt};

pub fn handle_reset(ctx: &AppContext, args: &ResetArgs) -> anyhow::Result<()> {
    let mut catalog = ctx.open_catalog()?;
    let ui_ctx = ctx.ui_context(false, None);
    let existing = catalog.count()?;

    let first = format!("Delete all {} records from the catalog?", existing);
    if !confirm_destructive(ctx, &ui_ctx, &first, existing, args.yes)? {
        return Err(anyhow::anyhow!("Reset cancelled"));
    }
    let second = "This cannot be undone without a backup. Really delete everything?";
    if !confirm_destructive(ctx, &ui_ctx, second, existing, args.yes)? {
        return Err(anyhow::anyhow!("Reset cancelled"));
    }

    let snapshot = write_safety_snapshot(ctx, &catalog, "reset")?;
    catalog.clear()?;
    print_snapshot(ctx, &ui_ctx, snapshot.as_deref());

    if !ctx.quiet() {
        print(
            &ui_ctx,
            &receipt(&ui_ctx, "Catalog cleared", &[("Deleted", &existing.to_string())]),
        );
    }
    Ok(())
}
