use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::output::{print_stats, stats_json};

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let catalog = ctx.open_catalog()?;
    let stats = catalog.compute_stats()?;

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&stats_json(&stats)?)?);
        return Ok(());
    }

    print_stats(&ui_ctx, &stats);
    Ok(())
}
