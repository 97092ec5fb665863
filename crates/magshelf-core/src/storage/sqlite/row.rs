//! Record row type for database queries.

use crate::error::{CatalogError, Result};
use crate::storage::types::Record;

/// Column list shared by every query that materializes records.
pub const RECORD_COLUMNS: &str =
    "id, magazine, month_full, month_abbr, year, year_input, special, is_special, created";

/// Raw row data from the records table, before parsing into domain types.
#[derive(Debug)]
pub struct RecordRow {
    pub id: i64,
    pub magazine: String,
    pub month_full: String,
    pub month_abbr: String,
    pub year: Option<i64>,
    pub year_input: String,
    pub special: String,
    pub is_special: i64,
    pub created: String,
}

impl RecordRow {
    /// Read a row selected with [`RECORD_COLUMNS`].
    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            magazine: row.get(1)?,
            month_full: row.get(2)?,
            month_abbr: row.get(3)?,
            year: row.get(4)?,
            year_input: row.get(5)?,
            special: row.get(6)?,
            is_special: row.get(7)?,
            created: row.get(8)?,
        })
    }
}

impl TryFrom<RecordRow> for Record {
    type Error = CatalogError;

    fn try_from(row: RecordRow) -> Result<Self> {
        let year = row
            .year
            .map(|value| {
                i32::try_from(value).map_err(|_| {
                    CatalogError::Storage(format!("Invalid year {} for record {}", value, row.id))
                })
            })
            .transpose()?;

        Ok(Record {
            id: row.id,
            magazine: row.magazine,
            month_full: row.month_full,
            month_abbr: row.month_abbr,
            year,
            year_input: row.year_input,
            special: row.special,
            is_special: row.is_special != 0,
            created: row.created,
        })
    }
}
