use magshelf_core::RecordFilter;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::{parse_output_format, parse_sort_state};
use crate::output::{print_record_list, records_json};
use crate::ui::{badge, header, hint, print, Badge};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref(), args.json)?;
    let sort = parse_sort_state(args.sort.as_deref(), args.desc, args.chronological)?;

    let mut filter = RecordFilter::new();
    if let Some(ref magazine) = args.magazine {
        filter = filter.magazine(magazine.clone());
    }
    if let Some(year) = args.year {
        filter = filter.year(year);
    }
    if let Some(from) = args.from {
        filter = filter.year_from(from);
    }
    if let Some(to) = args.to {
        filter = filter.year_to(to);
    }
    if let Some(ref month) = args.month {
        filter = filter.month(month.clone());
    }
    if args.special_only {
        filter = filter.special_only();
    }
    if let Some(ref search) = args.search {
        filter = filter.search(search.clone());
    }

    let catalog = ctx.open_catalog()?;
    let records = catalog.view(&filter, sort)?;

    let ui_ctx = ctx.ui_context(args.json, format.map(|f| f.as_str()));

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&records_json(&records)?)?);
        return Ok(());
    }

    if ui_ctx.mode.is_pretty() && !ctx.quiet() {
        let total = catalog.count()?;
        let context = if filter.is_empty() {
            format!("{} records", records.len())
        } else {
            format!("{} of {} records", records.len(), total)
        };
        print(&ui_ctx, &header(&ui_ctx, "list", Some(&context)));
        if records.is_empty() {
            print(&ui_ctx, &badge(&ui_ctx, Badge::Warn, "No records match"));
            if total == 0 {
                print(&ui_ctx, &hint(&ui_ctx, "magshelf import <file>  \u{00B7}  magshelf add"));
            }
            return Ok(());
        }
    }

    print_record_list(&ui_ctx, &records);
    Ok(())
}
