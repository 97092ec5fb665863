use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::{validate_entry, EntryFields};
use crate::ui::{print, receipt};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let record = validate_entry(&EntryFields {
        magazine: &args.magazine,
        month: &args.month,
        year: &args.year,
        special: args.special.as_deref().unwrap_or(""),
        is_special: args.special_issue,
    })?;

    let mut catalog = ctx.open_catalog()?;
    let id = catalog.create_record(&record)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let stored = catalog.require_record(id)?;
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Added record",
                &[
                    ("ID", &id.to_string()),
                    ("Magazine", &stored.magazine),
                    ("Month", &stored.display_month()),
                    ("Year", &stored.display_year()),
                ],
            ),
        );
    }
    Ok(())
}
