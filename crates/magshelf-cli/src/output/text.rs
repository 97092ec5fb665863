//! Text and table output formatting for records and statistics.

use magshelf_core::{CatalogStats, Record};

use crate::ui::{blank_line, header, kv, print, simple_table, table, Column, UiContext};

const RECORD_COLUMNS: [Column; 6] = [
    Column::new("ID"),
    Column::new("Magazine"),
    Column::new("Month"),
    Column::new("Year"),
    Column::new("Special"),
    Column::new("Created"),
];

/// Special column text: the note, prefixed when the record is flagged.
pub fn special_display(record: &Record) -> String {
    match (record.is_special, record.special.is_empty()) {
        (true, true) => "Special".to_string(),
        (true, false) => format!("Special: {}", record.special),
        (false, _) => record.special.clone(),
    }
}

fn created_date(record: &Record) -> &str {
    record.created.get(..10).unwrap_or(&record.created)
}

fn record_row(record: &Record) -> Vec<String> {
    vec![
        record.id.to_string(),
        record.magazine.clone(),
        record.display_month(),
        record.display_year(),
        special_display(record),
        created_date(record).to_string(),
    ]
}

/// Print a single record as key-value lines.
pub fn print_record(ui_ctx: &UiContext, record: &Record) {
    print(ui_ctx, &kv(ui_ctx, "ID", &record.id.to_string()));
    print(ui_ctx, &kv(ui_ctx, "Magazine", &record.magazine));
    print(ui_ctx, &kv(ui_ctx, "Month", &record.display_month()));
    print(ui_ctx, &kv(ui_ctx, "Year", &record.display_year()));
    if !record.year_input.is_empty() {
        print(ui_ctx, &kv(ui_ctx, "Year Input", &record.year_input));
    }
    if !record.special.is_empty() {
        print(ui_ctx, &kv(ui_ctx, "Special", &record.special));
    }
    print(
        ui_ctx,
        &kv(
            ui_ctx,
            "Special Issue",
            if record.is_special { "yes" } else { "no" },
        ),
    );
    print(ui_ctx, &kv(ui_ctx, "Created", &record.created));
}

/// Print records as a table (pretty) or tab-separated rows (plain).
pub fn print_record_list(ui_ctx: &UiContext, records: &[Record]) {
    let rows: Vec<Vec<String>> = records.iter().map(record_row).collect();
    if rows.is_empty() {
        return;
    }
    print(ui_ctx, &table(ui_ctx, &RECORD_COLUMNS, &rows));
}

/// Print the catalog summary.
pub fn print_stats(ui_ctx: &UiContext, stats: &CatalogStats) {
    let year_range = stats
        .year_range()
        .map(|(first, last)| format!("{} - {}", first, last))
        .unwrap_or_else(|| "N/A".to_string());

    if !ui_ctx.mode.is_pretty() {
        println!("total={}", stats.total);
        println!("special={}", stats.special);
        println!("year_range={}", year_range);
        for (magazine, count) in &stats.by_magazine {
            println!("magazine={}\t{}", magazine, count);
        }
        for (year, count) in &stats.by_year {
            println!("year={}\t{}", year, count);
        }
        for month in stats.months_in_calendar_order() {
            let count = stats.by_month.get(&month).copied().unwrap_or(0);
            println!("month={}\t{}", month, count);
        }
        return;
    }

    print(ui_ctx, &header(ui_ctx, "stats", None));
    blank_line(ui_ctx);
    print(ui_ctx, &kv(ui_ctx, "Total", &stats.total.to_string()));
    print(ui_ctx, &kv(ui_ctx, "Special Issues", &stats.special.to_string()));
    print(ui_ctx, &kv(ui_ctx, "Year Range", &year_range));

    if !stats.by_magazine.is_empty() {
        blank_line(ui_ctx);
        let rows: Vec<Vec<String>> = stats
            .by_magazine
            .iter()
            .map(|(name, count)| vec![name.clone(), count.to_string()])
            .collect();
        print(
            ui_ctx,
            &simple_table(ui_ctx, &[Column::new("Magazine"), Column::new("Count")], &rows),
        );
    }

    if !stats.by_year.is_empty() {
        blank_line(ui_ctx);
        let rows: Vec<Vec<String>> = stats
            .by_year
            .iter()
            .map(|(year, count)| vec![year.to_string(), count.to_string()])
            .collect();
        print(
            ui_ctx,
            &simple_table(ui_ctx, &[Column::new("Year"), Column::new("Count")], &rows),
        );
    }

    if !stats.by_month.is_empty() {
        blank_line(ui_ctx);
        let rows: Vec<Vec<String>> = stats
            .months_in_calendar_order()
            .into_iter()
            .map(|month| {
                let count = stats.by_month.get(&month).copied().unwrap_or(0);
                vec![month, count.to_string()]
            })
            .collect();
        print(
            ui_ctx,
            &simple_table(ui_ctx, &[Column::new("Month"), Column::new("Count")], &rows),
        );
    }
}
