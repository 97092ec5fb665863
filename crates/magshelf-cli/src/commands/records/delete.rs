use magshelf_core::CatalogError;

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::ui::{print, receipt};

use super::record_not_found;

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut catalog = ctx.open_catalog()?;
    match catalog.delete_record(args.id) {
        Err(CatalogError::NotFound(id)) => return Err(record_not_found(id).into()),
        other => other?,
    }

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        print(
            &ui_ctx,
            &receipt(&ui_ctx, "Deleted record", &[("ID", &args.id.to_string())]),
        );
    }
    Ok(())
}
