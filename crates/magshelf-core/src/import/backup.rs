//! JSON backup restore.
//!
//! Two document shapes are accepted: a bare array of records, or an object
//! whose `magazines` member is that array (the shape written by
//! [`export_backup`](crate::export::export_backup)). Each element is read
//! leniently; missing fields take defaults. `monthAbbr` is re-derived from
//! `monthFull` and only survives on entries that have no full month.

use serde_json::{Map, Value};
use tracing::info;

use crate::error::{CatalogError, Result};
use crate::storage::{now_timestamp, NewRecord, RecordStore};

const EXPECTED_SHAPE: &str =
    "Invalid JSON structure. Expected array of magazines or object with magazines property.";

/// Parse a backup document into candidate records.
///
/// # Errors
///
/// Returns `CatalogError::Format` when the text is not JSON, when the
/// document has neither accepted shape, or when an element is not an object.
pub fn parse_backup(text: &str) -> Result<Vec<NewRecord>> {
    let document: Value = serde_json::from_str(text)
        .map_err(|err| CatalogError::Format(format!("Invalid JSON format: {}", err)))?;

    let elements = match document {
        Value::Array(elements) => elements,
        Value::Object(mut object) => match object.remove("magazines") {
            Some(Value::Array(elements)) => elements,
            _ => return Err(CatalogError::Format(EXPECTED_SHAPE.to_string())),
        },
        _ => return Err(CatalogError::Format(EXPECTED_SHAPE.to_string())),
    };

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| match element {
            Value::Object(fields) => Ok(record_from_object(fields)),
            _ => Err(CatalogError::Format(format!(
                "Backup entry {} is not an object",
                index
            ))),
        })
        .collect()
}

fn record_from_object(fields: &Map<String, Value>) -> NewRecord {
    let created = text_field(fields, "created");
    let created = if created.is_empty() {
        now_timestamp()
    } else {
        created
    };

    NewRecord::new(text_field(fields, "magazine"), text_field(fields, "monthFull"))
        .with_year(year_field(fields), text_field(fields, "yearInput"))
        .with_special(
            text_field(fields, "special"),
            matches!(fields.get("isSpecial"), Some(Value::Bool(true))),
        )
        .with_created(created)
        .with_legacy_abbr(text_field(fields, "monthAbbr"))
}

fn text_field(fields: &Map<String, Value>, key: &str) -> String {
    match fields.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(true)) => "true".to_string(),
        _ => String::new(),
    }
}

/// Stored year of a backup entry. Zero and unparsable values mean "no year".
fn year_field(fields: &Map<String, Value>) -> Option<i32> {
    let year = match fields.get("year")? {
        Value::Number(number) => number.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::String(text) => text.trim().parse::<i32>().ok(),
        _ => None,
    }?;
    (year != 0).then_some(year)
}

/// Replace the catalog with the records of a backup document.
///
/// An empty record list leaves the store untouched and returns 0.
///
/// # Errors
///
/// Returns `CatalogError::Format` for malformed documents; the store is not
/// modified in that case.
pub fn import_backup<S: RecordStore + ?Sized>(store: &mut S, text: &str) -> Result<usize> {
    restore_records(store, &parse_backup(text)?)
}

/// Replace the catalog with already-parsed backup records.
///
/// An empty list leaves the store untouched and returns 0.
pub fn restore_records<S: RecordStore + ?Sized>(
    store: &mut S,
    records: &[NewRecord],
) -> Result<usize> {
    if records.is_empty() {
        return Ok(0);
    }

    let inserted = store.replace_all(records)?;
    info!(inserted, "restored backup");
    Ok(inserted)
}
