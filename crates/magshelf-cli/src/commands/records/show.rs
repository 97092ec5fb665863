use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::{print_record, record_json};
use crate::ui::{blank_line, header, print, OutputMode};

use super::record_not_found;

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let catalog = ctx.open_catalog()?;
    let record = catalog
        .get_record(args.id)?
        .ok_or_else(|| record_not_found(args.id))?;

    let ui_ctx = ctx.ui_context(args.json, None);

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&record_json(&record)?)?);
        return Ok(());
    }

    if ui_ctx.mode == OutputMode::Pretty && !ctx.quiet() {
        print(&ui_ctx, &header(&ui_ctx, "show", None));
        blank_line(&ui_ctx);
    }
    print_record(&ui_ctx, &record);
    Ok(())
}
