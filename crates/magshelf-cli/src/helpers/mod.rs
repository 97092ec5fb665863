//! Argument parsing and validation helpers for the CLI.
//!
//! This module provides utilities for:
//! - Output format and sort option parsing (`parsing`)
//! - Manual-entry validation for `add` and `edit` (`validation`)

mod parsing;
mod validation;

// Re-export public API
pub use parsing::{parse_output_format, parse_sort_state};
pub use validation::{validate_entry, EntryFields};
