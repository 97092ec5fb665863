//! Storage abstractions and backends for the record collection.
//!
//! - [`SqliteStore`]: file-backed SQLite database (the default engine)
//! - [`MemoryStore`]: in-process map, used by tests and throwaway catalogs

mod memory;
mod sqlite;
mod traits;
mod types;

pub use memory::MemoryStore;
pub use sqlite::{SqliteStore, StoreMetadata, SCHEMA_VERSION};
pub use traits::RecordStore;
pub use types::{now_timestamp, parse_timestamp_millis, NewRecord, Record};
