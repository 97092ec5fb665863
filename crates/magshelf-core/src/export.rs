//! Backup document format.
//!
//! A backup is a JSON object carrying every record plus enough envelope to
//! sanity-check it on restore:
//!
//! ```json
//! { "version": 1, "timestamp": 1700000000000, "count": 2, "magazines": [ ... ] }
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::storage::{Record, RecordStore};

/// Format version written into new backups.
pub const BACKUP_VERSION: u32 = 1;

/// Serialized snapshot of the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupDocument {
    pub version: u32,

    /// Export time in epoch milliseconds
    pub timestamp: i64,

    pub count: usize,

    pub magazines: Vec<Record>,
}

impl BackupDocument {
    /// Wrap `records` in a document stamped with the current time.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            version: BACKUP_VERSION,
            timestamp: Utc::now().timestamp_millis(),
            count: records.len(),
            magazines: records,
        }
    }

    /// Pretty-printed JSON text of the document.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Snapshot every record in the store, in id order.
pub fn export_backup<S: RecordStore + ?Sized>(store: &S) -> Result<BackupDocument> {
    let mut records = store.list_all()?;
    records.sort_by_key(|record| record.id);

    let document = BackupDocument::new(records);
    info!(count = document.count, "exported backup");
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::import_backup;
    use crate::storage::{MemoryStore, NewRecord};

    fn seeded_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store
            .create_record(
                &NewRecord::new("Playboy", "March")
                    .with_year(Some(1975), "75")
                    .with_created("2024-01-01T00:00:00.000Z"),
            )
            .unwrap();
        store
            .create_record(
                &NewRecord::new("Oui", "Holiday")
                    .with_special("Holiday Special", true)
                    .with_created("2024-01-02T00:00:00.000Z"),
            )
            .unwrap();
        store
    }

    #[test]
    fn test_document_envelope() {
        let document = export_backup(&seeded_store()).unwrap();
        assert_eq!(document.version, BACKUP_VERSION);
        assert_eq!(document.count, 2);
        assert!(document.timestamp > 0);

        let value: serde_json::Value = serde_json::from_str(&document.to_json_pretty().unwrap()).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["magazines"][0]["monthAbbr"], "mar");
        assert_eq!(value["magazines"][1]["isSpecial"], true);
    }

    #[test]
    fn test_export_then_restore_preserves_content() {
        let source = seeded_store();
        let text = export_backup(&source).unwrap().to_json_pretty().unwrap();

        let mut target = MemoryStore::new();
        assert_eq!(import_backup(&mut target, &text).unwrap(), 2);

        let strip = |records: Vec<Record>| -> Vec<Record> {
            records.into_iter().map(|r| Record { id: 0, ..r }).collect()
        };
        assert_eq!(
            strip(source.list_all().unwrap()),
            strip(target.list_all().unwrap())
        );
    }

    #[test]
    fn test_empty_catalog_exports_empty_document() {
        let document = export_backup(&MemoryStore::new()).unwrap();
        assert_eq!(document.count, 0);
        assert!(document.magazines.is_empty());
    }
}
