use magshelf_core::CatalogError;

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::helpers::{validate_entry, EntryFields};
use crate::ui::{print, receipt};

use super::record_not_found;

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    if args.magazine.is_none()
        && args.month.is_none()
        && args.year.is_none()
        && args.special.is_none()
        && args.special_issue.is_none()
    {
        return Err(CliError::invalid_input(
            "Nothing to change. Pass at least one of --magazine, --month, --year, --special, --special-issue.",
        )
        .into());
    }

    let mut catalog = ctx.open_catalog()?;
    let current = catalog.get_record(args.id)?.ok_or_else(|| record_not_found(args.id))?;

    // Unchanged fields are revalidated too, as the edit form does.
    let current_month = current.display_month();
    let current_year = current.year_for_editing();
    let mut updated = validate_entry(&EntryFields {
        magazine: args.magazine.as_deref().unwrap_or(&current.magazine),
        month: args.month.as_deref().unwrap_or(&current_month),
        year: args.year.as_deref().unwrap_or(&current_year),
        special: args.special.as_deref().unwrap_or(&current.special),
        is_special: args.special_issue.unwrap_or(current.is_special),
    })?;
    updated.created = Some(current.created.clone());

    match catalog.update_record(args.id, &updated) {
        Err(CatalogError::NotFound(id)) => return Err(record_not_found(id).into()),
        other => other?,
    }

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let stored = catalog.require_record(args.id)?;
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Updated record",
                &[
                    ("ID", &args.id.to_string()),
                    ("Magazine", &stored.magazine),
                    ("Month", &stored.display_month()),
                    ("Year", &stored.display_year()),
                ],
            ),
        );
    }
    Ok(())
}
