//! Comma-delimited text import.
//!
//! The first non-blank line is the header row. Recognized headers are
//! matched case-sensitively; anything else is ignored:
//!
//! | Header | Field |
//! | --- | --- |
//! | `Magazine` | magazine |
//! | `Year`, then `YearInput` | year (via [`resolve_year`]) |
//! | `YearInput` | yearInput (kept verbatim) |
//! | `Month`, then `Month_Full`, then `Month_Abbr` | monthFull |
//! | `Special` | special |
//! | `isSpecial` | isSpecial (`"true"` only) |
//! | `Created` | created (defaults to now) |
//!
//! Field splitting honors double quotes: a `"` toggles quoted mode, in which
//! commas are literal, and the quote characters themselves are dropped.

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::normalize::{normalize_month, resolve_year};
use crate::storage::{now_timestamp, NewRecord, RecordStore};

/// Placeholder some spreadsheet exports write for empty cells.
const UNDEFINED: &str = "undefined";

/// Split one line into trimmed fields, honoring double-quoted sections.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Trim a value and strip one surrounding quote from each end.
fn clean_value(value: &str) -> String {
    let trimmed = value.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix('"').unwrap_or(trimmed);
    trimmed.to_string()
}

/// Column positions of the recognized headers. Later duplicates win.
#[derive(Debug, Default)]
struct Columns {
    magazine: Option<usize>,
    year: Option<usize>,
    year_input: Option<usize>,
    month: Option<usize>,
    month_full: Option<usize>,
    month_abbr: Option<usize>,
    special: Option<usize>,
    is_special: Option<usize>,
    created: Option<usize>,
}

impl Columns {
    fn from_header(line: &str) -> Self {
        let mut columns = Self::default();
        for (index, header) in split_fields(line).iter().enumerate() {
            let slot = match clean_value(header).as_str() {
                "Magazine" => &mut columns.magazine,
                "Year" => &mut columns.year,
                "YearInput" => &mut columns.year_input,
                "Month" => &mut columns.month,
                "Month_Full" => &mut columns.month_full,
                "Month_Abbr" => &mut columns.month_abbr,
                "Special" => &mut columns.special,
                "isSpecial" => &mut columns.is_special,
                "Created" => &mut columns.created,
                _ => continue,
            };
            *slot = Some(index);
        }
        columns
    }
}

/// One data row with its values cleaned, looked up by column.
struct Row {
    values: Vec<String>,
}

impl Row {
    fn get(&self, column: Option<usize>) -> &str {
        column
            .and_then(|index| self.values.get(index))
            .map(String::as_str)
            .unwrap_or("")
    }
}

fn is_present(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed != UNDEFINED
}

fn record_from_row(columns: &Columns, row: &Row, line_number: usize) -> NewRecord {
    let year_text = row.get(columns.year);
    let year_input = row.get(columns.year_input);

    let mut year = None;
    if is_present(year_text) {
        year = resolve_year(year_text);
    }
    if year.is_none() && is_present(year_input) {
        year = resolve_year(year_input);
    }

    let raw_month = [columns.month, columns.month_full, columns.month_abbr]
        .into_iter()
        .map(|column| row.get(column))
        .find(|value| !value.is_empty())
        .unwrap_or("")
        .trim();
    let month_full = if is_present(raw_month) {
        let normalized = normalize_month(raw_month);
        if normalized.is_empty() {
            warn!(line = line_number, month = raw_month, "keeping unrecognized month as-is");
            raw_month.to_string()
        } else {
            normalized
        }
    } else {
        String::new()
    };

    let created = row.get(columns.created);
    let created = if created.is_empty() {
        now_timestamp()
    } else {
        created.to_string()
    };

    NewRecord::new(row.get(columns.magazine), month_full)
        .with_year(year, year_input)
        .with_special(
            row.get(columns.special),
            row.get(columns.is_special) == "true",
        )
        .with_created(created)
}

/// Parse delimited text into candidate records.
///
/// Returns `None` when the input has fewer than two non-blank lines (no
/// header, or a header with no data). Rows whose first field is empty are
/// skipped. A leading byte-order mark is ignored.
pub fn parse_delimited(text: &str) -> Option<Vec<NewRecord>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text.split('\n').filter(|line| !line.trim().is_empty()).collect();
    if lines.len() < 2 {
        return None;
    }

    let columns = Columns::from_header(lines[0]);
    let mut records = Vec::with_capacity(lines.len() - 1);

    for (offset, line) in lines[1..].iter().enumerate() {
        let line_number = offset + 2;
        let values = split_fields(line);
        if values.first().map_or(true, |first| first.is_empty()) {
            debug!(line = line_number, "skipping row with empty first field");
            continue;
        }

        let row = Row {
            values: values.iter().map(|value| clean_value(value)).collect(),
        };
        records.push(record_from_row(&columns, &row, line_number));
    }

    Some(records)
}

/// Replace the catalog with the records parsed from delimited text.
///
/// Input without data lines leaves the store untouched and returns 0.
pub fn import_delimited<S: RecordStore + ?Sized>(store: &mut S, text: &str) -> Result<usize> {
    let Some(records) = parse_delimited(text) else {
        debug!("delimited input has no data lines; catalog left unchanged");
        return Ok(0);
    };
    import_records(store, &records)
}

/// Replace the catalog with already-parsed delimited rows.
pub fn import_records<S: RecordStore + ?Sized>(
    store: &mut S,
    records: &[NewRecord],
) -> Result<usize> {
    let inserted = store.replace_all(records)?;
    info!(inserted, "imported delimited text");
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_split_fields_honors_quotes() {
        assert_eq!(split_fields("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(
            split_fields(r#"Playboy,"Holiday, Special",true"#),
            vec!["Playboy", "Holiday, Special", "true"]
        );
        assert_eq!(split_fields(r#""",x"#), vec!["", "x"]);
        assert_eq!(split_fields(""), vec![""]);
        assert_eq!(split_fields("a,"), vec!["a", ""]);
    }

    #[test]
    fn test_clean_value_strips_surrounding_quotes() {
        assert_eq!(clean_value(r#" "Oui" "#), "Oui");
        assert_eq!(clean_value(r#""half"#), "half");
        assert_eq!(clean_value("plain"), "plain");
    }

    #[test]
    fn test_parse_maps_headers_and_normalizes() {
        let text = "Magazine,Month,Year,YearInput,Special,isSpecial,Created\n\
                    Playboy,jan,75,75,,false,2024-01-01T00:00:00.000Z\n\
                    Oui,SEPT,,82,\"Anniversary, 10th\",true,\n";
        let records = parse_delimited(text).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.magazine, "Playboy");
        assert_eq!(first.month_full, "January");
        assert_eq!(first.month_abbr(), "jan");
        assert_eq!(first.year, Some(1975));
        assert_eq!(first.year_input, "75");
        assert!(!first.is_special);
        assert_eq!(first.created.as_deref(), Some("2024-01-01T00:00:00.000Z"));

        let second = &records[1];
        assert_eq!(second.month_full, "September");
        assert_eq!(second.year, Some(1982));
        assert_eq!(second.special, "Anniversary, 10th");
        assert!(second.is_special);
        assert!(second.created.is_some());
    }

    #[test]
    fn test_parse_month_column_fallbacks() {
        let text = "Magazine,Month_Full,Month_Abbr,Year\n\
                    A,,feb,1990\n\
                    B,Holiday,,1991\n\
                    C,undefined,,1992\n";
        let records = parse_delimited(text).unwrap();
        assert_eq!(records[0].month_full, "February");
        assert_eq!(records[1].month_full, "Holiday");
        assert_eq!(records[1].month_abbr(), "hol");
        assert_eq!(records[2].month_full, "");
    }

    #[test]
    fn test_parse_year_falls_back_to_year_input() {
        let text = "Magazine,Year,YearInput\nA,undefined,05\nB,3000,99\nC,abc,\n";
        let records = parse_delimited(text).unwrap();
        assert_eq!(records[0].year, Some(2005));
        assert_eq!(records[1].year, Some(1999));
        assert_eq!(records[2].year, None);
    }

    #[test]
    fn test_parse_skips_blank_first_field_and_blank_lines() {
        let text = "Magazine,Month,Year\r\n\r\n,March,1975\r\n  \nPlayboy,March,1975\r\n";
        let records = parse_delimited(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].magazine, "Playboy");
    }

    #[test]
    fn test_parse_headers_are_case_sensitive() {
        let text = "magazine,MONTH,Year,Notes\nPlayboy,March,1975,ignored\n";
        let records = parse_delimited(text).unwrap();
        assert_eq!(records[0].magazine, "");
        assert_eq!(records[0].month_full, "");
        assert_eq!(records[0].year, Some(1975));
    }

    #[test]
    fn test_parse_ignores_byte_order_mark() {
        let records = parse_delimited("\u{feff}Magazine,Month,Year\nPlayboy,mar,75\n").unwrap();
        assert_eq!(records[0].magazine, "Playboy");
        assert_eq!(records[0].month_full, "March");
        assert_eq!(records[0].year, Some(1975));
    }

    #[test]
    fn test_parse_header_only_is_none() {
        assert!(parse_delimited("Magazine,Month,Year\n").is_none());
        assert!(parse_delimited("").is_none());
    }

    #[test]
    fn test_import_replaces_contents() {
        let mut store = MemoryStore::new();
        store.create_record(&NewRecord::new("Old", "May")).unwrap();

        let count = import_delimited(&mut store, "Magazine,Month,Year\nA,jan,80\nB,feb,81\n").unwrap();
        assert_eq!(count, 2);

        let records = store.list_all().unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.magazine != "Old"));
    }

    #[test]
    fn test_import_without_data_keeps_store() {
        let mut store = MemoryStore::new();
        store.create_record(&NewRecord::new("Old", "May")).unwrap();

        assert_eq!(import_delimited(&mut store, "Magazine,Month,Year").unwrap(), 0);
        assert_eq!(store.count().unwrap(), 1);
    }
}
