//! Catalog facade.
//!
//! [`Catalog`] is the single entry point a front end needs: it owns a
//! [`RecordStore`] and layers import, export, querying, and statistics on
//! top of it. Destructive calls (`clear`, imports) run unconditionally;
//! prompting and safety snapshots are the caller's job.

use std::path::Path;

use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::export::{export_backup, BackupDocument};
use crate::import::{import_backup, import_delimited, import_records, restore_records};
use crate::query::{filter, RecordFilter};
use crate::sort::SortState;
use crate::stats::{compute_stats, CatalogStats};
use crate::storage::{MemoryStore, NewRecord, Record, RecordStore, SqliteStore};

/// A record collection plus the operations a front end drives.
pub struct Catalog<S: RecordStore> {
    store: S,
}

impl Catalog<SqliteStore> {
    /// Open the catalog database at `path`, creating it if needed.
    pub fn init(path: &Path) -> Result<Self> {
        Ok(Self::new(SqliteStore::open(path)?))
    }
}

impl Catalog<MemoryStore> {
    /// A catalog that lives only as long as the value.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }
}

impl<S: RecordStore> Catalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn list_all(&self) -> Result<Vec<Record>> {
        self.store.list_all()
    }

    pub fn count(&self) -> Result<usize> {
        self.store.count()
    }

    pub fn get_record(&self, id: i64) -> Result<Option<Record>> {
        self.store.get_record(id)
    }

    /// Like [`get_record`](Self::get_record), but a missing id is an error.
    pub fn require_record(&self, id: i64) -> Result<Record> {
        self.store
            .get_record(id)?
            .ok_or(CatalogError::NotFound(id))
    }

    pub fn create_record(&mut self, record: &NewRecord) -> Result<i64> {
        let id = self.store.create_record(record)?;
        debug!(id, magazine = %record.magazine, "created record");
        Ok(id)
    }

    pub fn update_record(&mut self, id: i64, record: &NewRecord) -> Result<()> {
        self.store.update_record(id, record)?;
        debug!(id, "updated record");
        Ok(())
    }

    pub fn delete_record(&mut self, id: i64) -> Result<()> {
        self.store.delete_record(id)?;
        debug!(id, "deleted record");
        Ok(())
    }

    /// Records matching `criteria`, in store order.
    pub fn filter(&self, criteria: &RecordFilter) -> Result<Vec<Record>> {
        Ok(filter(&self.store.list_all()?, criteria))
    }

    /// Records matching `criteria`, ordered by `sort`.
    pub fn view(&self, criteria: &RecordFilter, sort: SortState) -> Result<Vec<Record>> {
        Ok(sort.apply(&self.filter(criteria)?))
    }

    pub fn compute_stats(&self) -> Result<CatalogStats> {
        Ok(compute_stats(&self.store.list_all()?))
    }

    /// Replace the catalog with the rows of a delimited-text file.
    pub fn import_text(&mut self, text: &str) -> Result<usize> {
        import_delimited(&mut self.store, text)
    }

    /// Replace the catalog with rows already read by
    /// [`parse_delimited`](crate::import::parse_delimited).
    pub fn import_records(&mut self, records: &[NewRecord]) -> Result<usize> {
        import_records(&mut self.store, records)
    }

    /// Replace the catalog with the records of a JSON backup.
    pub fn import_backup(&mut self, text: &str) -> Result<usize> {
        import_backup(&mut self.store, text)
    }

    /// Replace the catalog with entries already read by
    /// [`parse_backup`](crate::import::parse_backup). An empty list is a no-op.
    pub fn restore_records(&mut self, records: &[NewRecord]) -> Result<usize> {
        restore_records(&mut self.store, records)
    }

    pub fn export_backup(&self) -> Result<BackupDocument> {
        export_backup(&self.store)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.clear()
    }

    pub fn check_integrity(&self) -> Result<()> {
        self.store.check_integrity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::{SortColumn, SortDirection};

    const CSV: &str = "Magazine,Month,Year,Special,isSpecial\n\
                       Playboy,mar,75,,false\n\
                       Playboy,dec,74,Holiday,true\n\
                       Oui,jun,80,,false\n";

    #[test]
    fn test_require_record_missing_is_not_found() {
        let catalog = Catalog::in_memory();
        assert!(catalog.get_record(3).unwrap().is_none());
        assert!(matches!(
            catalog.require_record(3),
            Err(CatalogError::NotFound(3))
        ));
    }

    #[test]
    fn test_import_filter_sort_flow() {
        let mut catalog = Catalog::in_memory();
        assert_eq!(catalog.import_text(CSV).unwrap(), 3);

        let playboy = catalog
            .view(&RecordFilter::new().magazine("Playboy"), SortState::Chronological)
            .unwrap();
        let months: Vec<&str> = playboy.iter().map(|r| r.month_full.as_str()).collect();
        assert_eq!(months, vec!["December", "March"]);

        let by_year_desc = catalog
            .view(
                &RecordFilter::new(),
                SortState::Column {
                    column: SortColumn::Year,
                    direction: SortDirection::Desc,
                },
            )
            .unwrap();
        assert_eq!(by_year_desc[0].magazine, "Oui");

        let stats = catalog.compute_stats().unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.special, 1);
        assert_eq!(stats.year_range(), Some((1974, 1980)));
    }

    #[test]
    fn test_backup_round_trip_between_catalogs() {
        let mut source = Catalog::in_memory();
        source.import_text(CSV).unwrap();
        let text = source.export_backup().unwrap().to_json_pretty().unwrap();

        let mut target = Catalog::in_memory();
        target
            .create_record(&NewRecord::from_input("Stale", "jan", "01"))
            .unwrap();
        assert_eq!(target.import_backup(&text).unwrap(), 3);

        let names: Vec<String> = target
            .list_all()
            .unwrap()
            .into_iter()
            .map(|r| r.magazine)
            .collect();
        assert_eq!(names, vec!["Playboy", "Playboy", "Oui"]);
    }

    #[test]
    fn test_parsed_records_replace_contents() {
        let mut catalog = Catalog::in_memory();
        catalog
            .create_record(&NewRecord::from_input("Stale", "jan", "01"))
            .unwrap();

        let rows = crate::import::parse_delimited(CSV).unwrap();
        assert_eq!(catalog.import_records(&rows).unwrap(), 3);
        assert_eq!(catalog.count().unwrap(), 3);

        assert_eq!(catalog.restore_records(&[]).unwrap(), 0);
        assert_eq!(catalog.count().unwrap(), 3);

        let entries = crate::import::parse_backup(r#"[{"magazine":"Oui","monthAbbr":"jun"}]"#).unwrap();
        assert_eq!(catalog.restore_records(&entries).unwrap(), 1);
        assert_eq!(catalog.list_all().unwrap()[0].display_month(), "June");
    }

    #[test]
    fn test_edit_and_clear() {
        let mut catalog = Catalog::in_memory();
        let id = catalog
            .create_record(&NewRecord::from_input("Oui", "sept", "82"))
            .unwrap();
        let created = catalog.require_record(id).unwrap().created;

        let mut edited = NewRecord::from(&catalog.require_record(id).unwrap());
        edited.month_full = "October".to_string();
        catalog.update_record(id, &edited).unwrap();

        let record = catalog.require_record(id).unwrap();
        assert_eq!(record.month_abbr, "oct");
        assert_eq!(record.created, created);

        catalog.clear().unwrap();
        assert_eq!(catalog.count().unwrap(), 0);
        assert!(matches!(
            catalog.delete_record(id),
            Err(CatalogError::NotFound(_))
        ));
        catalog.check_integrity().unwrap();
    }
}
