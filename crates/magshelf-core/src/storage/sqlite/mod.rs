//! SQLite storage backend.
//!
//! Records live in a single `records` table whose `INTEGER PRIMARY KEY
//! AUTOINCREMENT` column supplies ids, so an id is never handed out twice
//! even after the table is cleared. Every mutation runs inside a
//! transaction that commits before the call returns.

mod row;

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::normalize::abbr_in_sync;
use crate::storage::traits::RecordStore;
use crate::storage::types::{now_timestamp, NewRecord, Record};

use row::{RecordRow, RECORD_COLUMNS};

/// Schema version written to new databases. Other versions are rejected.
pub const SCHEMA_VERSION: i64 = 1;

/// Metadata kept alongside the records.
#[derive(Debug, Clone)]
pub struct StoreMetadata {
    /// Schema version of the database
    pub schema_version: i64,

    /// When this database was created
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp (informational)
    pub last_modified: DateTime<Utc>,
}

/// SQLite-backed record store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the database at `path`, creating it and its schema if needed.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    CatalogError::Storage(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened catalog database");
        Self::from_connection(conn)
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> Result<Self> {
        let has_meta: Option<String> = conn
            .query_row(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'meta'",
                [],
                |row| row.get(0),
            )
            .optional()?;

        if has_meta.is_none() {
            Self::initialize_schema(&mut conn)?;
        } else {
            let version: Option<String> = conn
                .query_row(
                    "SELECT value FROM meta WHERE key = 'schema_version'",
                    [],
                    |row| row.get(0),
                )
                .optional()?;
            let version = version
                .as_deref()
                .and_then(|value| value.parse::<i64>().ok());
            if version != Some(SCHEMA_VERSION) {
                return Err(CatalogError::Storage(format!(
                    "Unsupported catalog schema version: {} (expected {})",
                    version.map_or_else(|| "missing".to_string(), |v| v.to_string()),
                    SCHEMA_VERSION
                )));
            }
        }

        Ok(Self { conn })
    }

    fn initialize_schema(conn: &mut Connection) -> Result<()> {
        let tx = conn.transaction()?;
        tx.execute_batch(
            r#"
            CREATE TABLE meta (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE TABLE records (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                magazine TEXT NOT NULL DEFAULT '',
                month_full TEXT NOT NULL DEFAULT '',
                month_abbr TEXT NOT NULL DEFAULT '',
                year INTEGER,
                year_input TEXT NOT NULL DEFAULT '',
                special TEXT NOT NULL DEFAULT '',
                is_special INTEGER NOT NULL DEFAULT 0,
                created TEXT NOT NULL
            );

            CREATE INDEX records_magazine ON records (magazine);
            CREATE INDEX records_year ON records (year);
            CREATE INDEX records_month ON records (month_full);
            CREATE INDEX records_is_special ON records (is_special);
            CREATE INDEX records_created ON records (created);
            CREATE INDEX records_year_month ON records (year, month_full);
            "#,
        )?;

        let created_at = Utc::now().to_rfc3339();
        tx.execute(
            "INSERT INTO meta (key, value) VALUES (?, ?)",
            ["schema_version", &SCHEMA_VERSION.to_string()],
        )?;
        tx.execute(
            "INSERT INTO meta (key, value) VALUES (?, ?)",
            ["created_at", &created_at],
        )?;
        tx.execute(
            "INSERT INTO meta (key, value) VALUES (?, ?)",
            ["last_modified", &created_at],
        )?;
        tx.commit()?;

        debug!("initialized catalog schema v{}", SCHEMA_VERSION);
        Ok(())
    }

    /// Get store metadata.
    pub fn metadata(&self) -> Result<StoreMetadata> {
        let read = |key: &str| -> Result<String> {
            Ok(self.conn.query_row(
                "SELECT value FROM meta WHERE key = ?",
                [key],
                |row| row.get(0),
            )?)
        };
        let parse = |key: &str, value: String| -> Result<DateTime<Utc>> {
            Ok(DateTime::parse_from_rfc3339(&value)
                .map_err(|e| CatalogError::Storage(format!("Invalid {} timestamp: {}", key, e)))?
                .with_timezone(&Utc))
        };

        let schema_version = read("schema_version")?
            .parse::<i64>()
            .map_err(|e| CatalogError::Storage(format!("Invalid schema version: {}", e)))?;
        let created_at = parse("created_at", read("created_at")?)?;
        let last_modified = parse("last_modified", read("last_modified")?)?;

        Ok(StoreMetadata {
            schema_version,
            created_at,
            last_modified,
        })
    }

    fn insert(tx: &rusqlite::Transaction<'_>, record: &NewRecord) -> Result<i64> {
        let created = record.created.clone().unwrap_or_else(now_timestamp);
        tx.execute(
            r#"
            INSERT INTO records (
                magazine,
                month_full,
                month_abbr,
                year,
                year_input,
                special,
                is_special,
                created
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            (
                &record.magazine,
                &record.month_full,
                record.month_abbr(),
                record.year,
                &record.year_input,
                &record.special,
                record.is_special,
                created,
            ),
        )?;
        Ok(tx.last_insert_rowid())
    }

    fn touch(tx: &rusqlite::Transaction<'_>) -> Result<()> {
        tx.execute(
            "UPDATE meta SET value = ? WHERE key = 'last_modified'",
            [Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

impl RecordStore for SqliteStore {
    fn create_record(&mut self, record: &NewRecord) -> Result<i64> {
        let tx = self.conn.transaction()?;
        let id = Self::insert(&tx, record)?;
        Self::touch(&tx)?;
        tx.commit()?;
        Ok(id)
    }

    fn get_record(&self, id: i64) -> Result<Option<Record>> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {} FROM records WHERE id = ?", RECORD_COLUMNS),
                [id],
                RecordRow::from_row,
            )
            .optional()?;

        row.map(Record::try_from).transpose()
    }

    fn update_record(&mut self, id: i64, record: &NewRecord) -> Result<()> {
        let tx = self.conn.transaction()?;
        let changed = tx.execute(
            r#"
            UPDATE records
            SET magazine = ?,
                month_full = ?,
                month_abbr = ?,
                year = ?,
                year_input = ?,
                special = ?,
                is_special = ?
            WHERE id = ?
            "#,
            (
                &record.magazine,
                &record.month_full,
                record.month_abbr(),
                record.year,
                &record.year_input,
                &record.special,
                record.is_special,
                id,
            ),
        )?;
        if changed == 0 {
            return Err(CatalogError::NotFound(id));
        }
        Self::touch(&tx)?;
        tx.commit()?;
        Ok(())
    }

    fn delete_record(&mut self, id: i64) -> Result<()> {
        let tx = self.conn.transaction()?;
        let changed = tx.execute("DELETE FROM records WHERE id = ?", [id])?;
        if changed == 0 {
            return Err(CatalogError::NotFound(id));
        }
        Self::touch(&tx)?;
        tx.commit()?;
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<Record>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM records ORDER BY id", RECORD_COLUMNS))?;
        let rows = stmt.query_map([], RecordRow::from_row)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?.try_into()?);
        }
        Ok(records)
    }

    fn replace_all(&mut self, records: &[NewRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM records", [])?;
        for record in records {
            Self::insert(&tx, record)?;
        }
        Self::touch(&tx)?;
        tx.commit()?;

        info!(removed, inserted = records.len(), "replaced catalog contents");
        Ok(records.len())
    }

    fn clear(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        let removed = tx.execute("DELETE FROM records", [])?;
        Self::touch(&tx)?;
        tx.commit()?;

        info!(removed, "cleared catalog");
        Ok(())
    }

    fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))?;
        usize::try_from(count)
            .map_err(|_| CatalogError::Storage(format!("Invalid record count: {}", count)))
    }

    fn check_integrity(&self) -> Result<()> {
        let status: String = self
            .conn
            .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        if status != "ok" {
            return Err(CatalogError::Storage(format!(
                "SQLite integrity check failed: {}",
                status
            )));
        }

        let mut stmt = self
            .conn
            .prepare("SELECT id, month_full, month_abbr FROM records")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;
        for row in rows {
            let (id, month_full, month_abbr) = row?;
            if !abbr_in_sync(&month_full, &month_abbr) {
                return Err(CatalogError::Storage(format!(
                    "Record {} has month_abbr {:?} out of sync with month_full {:?}",
                    id, month_abbr, month_full
                )));
            }
        }

        let missing_meta: i64 = self.conn.query_row(
            "SELECT 3 - COUNT(*) FROM meta WHERE key IN ('schema_version', 'created_at', 'last_modified')",
            [],
            |row| row.get(0),
        )?;
        if missing_meta > 0 {
            return Err(CatalogError::Storage(
                "Metadata keys missing".to_string(),
            ));
        }

        Ok(())
    }
}
