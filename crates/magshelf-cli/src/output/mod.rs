//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying records
//! and statistics in various formats (JSON, table, plain text).

mod json;
mod text;

// Re-export public API
pub use json::{record_json, records_json, stats_json};
pub use text::{print_record, print_record_list, print_stats, special_display};
