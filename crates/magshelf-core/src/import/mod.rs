//! Import parsers.
//!
//! Both formats turn file content into [`NewRecord`]s and then replace the
//! whole catalog with them in one batch. Imports never merge.
//!
//! - [`delimited`]: comma-separated text with a header row
//! - [`backup`]: JSON backups written by [`crate::export`]
//!
//! [`NewRecord`]: crate::storage::NewRecord

pub mod backup;
pub mod delimited;

pub use backup::{import_backup, parse_backup, restore_records};
pub use delimited::{import_delimited, import_records, parse_delimited, split_fields};
