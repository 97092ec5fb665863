//! Record store trait definition.
//!
//! The `RecordStore` trait is the persistence seam of the catalog. Backends
//! keep a single collection of records keyed by an auto-assigned integer id.
//! Nothing above this trait depends on a particular engine's transaction API.

use super::types::{NewRecord, Record};
use crate::error::Result;

/// Storage interface for the record collection.
///
/// All implementations must ensure:
/// - Ids are assigned monotonically and never reused
/// - `month_abbr` is derived from `month_full` on every write
/// - A mutation is durable before the call returns
/// - `replace_all` either installs the whole new set or leaves the old one
pub trait RecordStore {
    /// Insert a new record.
    ///
    /// # Returns
    ///
    /// Returns the id assigned to the record.
    fn create_record(&mut self, record: &NewRecord) -> Result<i64>;

    /// Get a record by id.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(record))` if found, `Ok(None)` if not found.
    fn get_record(&self, id: i64) -> Result<Option<Record>>;

    /// Replace every field of a record except `id` and `created`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no record has this id.
    fn update_record(&mut self, id: i64, record: &NewRecord) -> Result<()>;

    /// Delete a record.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::NotFound` if no record has this id.
    fn delete_record(&mut self, id: i64) -> Result<()>;

    /// List every record.
    ///
    /// No particular order is promised; callers sort explicitly.
    fn list_all(&self) -> Result<Vec<Record>>;

    /// Clear the store and insert `records` as one batch.
    ///
    /// # Returns
    ///
    /// Returns the number of records inserted.
    fn replace_all(&mut self, records: &[NewRecord]) -> Result<usize>;

    /// Remove every record. Ids already handed out stay retired.
    fn clear(&mut self) -> Result<()>;

    /// Number of stored records.
    fn count(&self) -> Result<usize> {
        Ok(self.list_all()?.len())
    }

    /// Check store integrity.
    ///
    /// Verifies engine-level consistency and that every stored
    /// `month_abbr` matches the value derived from `month_full`.
    fn check_integrity(&self) -> Result<()>;
}
