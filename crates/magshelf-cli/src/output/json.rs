//! JSON output formatting for records and statistics.

use magshelf_core::{CatalogStats, Record};

/// Convert a record to JSON for output.
///
/// Uses the same camelCase field names as a backup file, plus the
/// display forms of year and month.
pub fn record_json(record: &Record) -> anyhow::Result<serde_json::Value> {
    let mut value = serde_json::to_value(record)?;
    if let Some(object) = value.as_object_mut() {
        object.insert(
            "displayYear".to_string(),
            serde_json::Value::String(record.display_year()),
        );
        object.insert(
            "displayMonth".to_string(),
            serde_json::Value::String(record.display_month()),
        );
    }
    Ok(value)
}

/// Convert multiple records to a JSON array for output.
pub fn records_json(records: &[Record]) -> anyhow::Result<serde_json::Value> {
    let values = records
        .iter()
        .map(record_json)
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(serde_json::Value::Array(values))
}

pub fn stats_json(stats: &CatalogStats) -> anyhow::Result<serde_json::Value> {
    let mut value = serde_json::to_value(stats)?;
    if let Some(object) = value.as_object_mut() {
        let range = stats
            .year_range()
            .map(|(first, last)| serde_json::json!({ "first": first, "last": last }))
            .unwrap_or(serde_json::Value::Null);
        object.insert("yearRange".to_string(), range);
        object.insert(
            "monthsInOrder".to_string(),
            serde_json::to_value(stats.months_in_calendar_order())?,
        );
    }
    Ok(value)
}
