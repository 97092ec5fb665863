//! # Magshelf Core
//!
//! Core library for Magshelf - a single-user catalog of magazine issues.
//!
//! This crate provides the data-management layer independent of any
//! presentation surface: record normalization, persistence, import/export,
//! filtering, sorting, and summary statistics.
//!
//! ## Architecture
//!
//! - **normalize**: Month and year canonicalization
//! - **storage**: Record store trait and implementations (SQLite, in-memory)
//! - **import**: Delimited-text and JSON backup parsers
//! - **export**: Backup document format
//! - **query**: Record filtering
//! - **sort**: Column and chronological ordering
//! - **stats**: Summary counts over the catalog
//! - **catalog**: Facade that ties the pieces together for a front end

pub mod catalog;
pub mod error;
pub mod export;
pub mod fs;
pub mod import;
pub mod normalize;
pub mod query;
pub mod sort;
pub mod stats;
pub mod storage;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use export::BackupDocument;
pub use query::{filter, RecordFilter};
pub use sort::{sort_by_column, sort_chronological, SortColumn, SortDirection, SortState};
pub use stats::{compute_stats, CatalogStats};
pub use storage::{MemoryStore, NewRecord, Record, RecordStore, SqliteStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
