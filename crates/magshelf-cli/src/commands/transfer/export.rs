use std::path::Path;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::ui::{print, receipt};

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let catalog = ctx.open_catalog()?;
    let document = catalog.export_backup()?;
    let json = document.to_json_pretty()?;

    let Some(ref destination) = args.destination else {
        println!("{}", json);
        return Ok(());
    };

    magshelf_core::fs::write_atomic(Path::new(destination), json.as_bytes())
        .map_err(|e| anyhow::anyhow!("Failed to write backup destination {}: {}", destination, e))?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Exported catalog",
                &[
                    ("Records", &document.count.to_string()),
                    ("Destination", destination),
                ],
            ),
        );
    }
    Ok(())
}
