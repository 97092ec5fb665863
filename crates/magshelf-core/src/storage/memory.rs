//! In-memory storage backend.

use std::collections::BTreeMap;

use tracing::info;

use crate::error::{CatalogError, Result};
use crate::normalize::abbr_in_sync;
use crate::storage::traits::RecordStore;
use crate::storage::types::{now_timestamp, NewRecord, Record};

/// Record store held entirely in process memory.
///
/// Nothing is persisted; dropping the store drops the catalog.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<i64, Record>,
    last_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

impl RecordStore for MemoryStore {
    fn create_record(&mut self, record: &NewRecord) -> Result<i64> {
        let id = self.next_id();
        let created = record.created.clone().unwrap_or_else(now_timestamp);
        self.records
            .insert(id, record.clone().into_record(id, created));
        Ok(id)
    }

    fn get_record(&self, id: i64) -> Result<Option<Record>> {
        Ok(self.records.get(&id).cloned())
    }

    fn update_record(&mut self, id: i64, record: &NewRecord) -> Result<()> {
        let existing = self
            .records
            .get_mut(&id)
            .ok_or(CatalogError::NotFound(id))?;
        let created = std::mem::take(&mut existing.created);
        *existing = record.clone().into_record(id, created);
        Ok(())
    }

    fn delete_record(&mut self, id: i64) -> Result<()> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or(CatalogError::NotFound(id))
    }

    fn list_all(&self) -> Result<Vec<Record>> {
        Ok(self.records.values().cloned().collect())
    }

    fn replace_all(&mut self, records: &[NewRecord]) -> Result<usize> {
        let mut replacement = BTreeMap::new();
        for record in records {
            let id = self.next_id();
            let created = record.created.clone().unwrap_or_else(now_timestamp);
            replacement.insert(id, record.clone().into_record(id, created));
        }
        let removed = std::mem::replace(&mut self.records, replacement).len();

        info!(removed, inserted = records.len(), "replaced catalog contents");
        Ok(records.len())
    }

    fn clear(&mut self) -> Result<()> {
        let removed = self.records.len();
        self.records.clear();

        info!(removed, "cleared catalog");
        Ok(())
    }

    fn count(&self) -> Result<usize> {
        Ok(self.records.len())
    }

    fn check_integrity(&self) -> Result<()> {
        for (id, record) in &self.records {
            if *id != record.id {
                return Err(CatalogError::Storage(format!(
                    "Record keyed {} carries id {}",
                    id, record.id
                )));
            }
            if !abbr_in_sync(&record.month_full, &record.month_abbr) {
                return Err(CatalogError::Storage(format!(
                    "Record {} has month_abbr {:?} out of sync with month_full {:?}",
                    id, record.month_abbr, record.month_full
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crud_cycle() {
        let mut store = MemoryStore::new();
        let id = store
            .create_record(&NewRecord::new("Playboy", "January").with_created("2021-01-01T00:00:00Z"))
            .unwrap();

        store
            .update_record(id, &NewRecord::new("Playboy", "February"))
            .unwrap();
        let record = store.get_record(id).unwrap().unwrap();
        assert_eq!(record.month_full, "February");
        assert_eq!(record.month_abbr, "feb");
        assert_eq!(record.created, "2021-01-01T00:00:00Z");

        store.delete_record(id).unwrap();
        assert!(store.get_record(id).unwrap().is_none());
        assert!(matches!(
            store.delete_record(id),
            Err(CatalogError::NotFound(_))
        ));
    }

    #[test]
    fn test_replace_all_assigns_fresh_ids() {
        let mut store = MemoryStore::new();
        let old = store.create_record(&NewRecord::new("Old", "May")).unwrap();

        let inserted = store
            .replace_all(&[NewRecord::new("A", "May"), NewRecord::new("B", "June")])
            .unwrap();
        assert_eq!(inserted, 2);

        let ids: Vec<i64> = store.list_all().unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.iter().all(|id| *id > old));
        store.check_integrity().unwrap();
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut store = MemoryStore::new();
        let err = store
            .update_record(7, &NewRecord::new("A", "May"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(7)));
    }
}
