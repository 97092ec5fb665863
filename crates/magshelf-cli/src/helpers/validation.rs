//! Manual-entry validation for `add` and `edit`.

use magshelf_core::normalize::{normalize_month, resolve_year};
use magshelf_core::NewRecord;

use crate::errors::CliError;

/// Raw field values as typed by the user.
pub struct EntryFields<'a> {
    pub magazine: &'a str,
    pub month: &'a str,
    pub year: &'a str,
    pub special: &'a str,
    pub is_special: bool,
}

/// Check hand-entered fields and build the record to store.
///
/// Imports are lenient; manual entry is not. A missing magazine, an
/// unrecognized month, or a year outside 1900-2099 is rejected.
pub fn validate_entry(fields: &EntryFields<'_>) -> Result<NewRecord, CliError> {
    let magazine = fields.magazine.trim();
    if magazine.is_empty() {
        return Err(CliError::invalid_input("Magazine name is required"));
    }

    let month = normalize_month(fields.month);
    if month.is_empty() {
        return Err(CliError::invalid_input(format!(
            "Unrecognized month '{}' (use a name like \"March\" or an abbreviation like \"mar\")",
            fields.month.trim()
        )));
    }

    let year_input = fields.year.trim();
    let Some(year) = resolve_year(year_input) else {
        return Err(CliError::invalid_input(format!(
            "Invalid year '{}' (use two or four digits, 1900-2099)",
            year_input
        )));
    };

    Ok(NewRecord::new(magazine, month)
        .with_year(Some(year), year_input)
        .with_special(fields.special.trim(), fields.is_special))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields<'a>(magazine: &'a str, month: &'a str, year: &'a str) -> EntryFields<'a> {
        EntryFields {
            magazine,
            month,
            year,
            special: "",
            is_special: false,
        }
    }

    #[test]
    fn test_valid_entry_is_normalized() {
        let record = validate_entry(&fields(" Oui ", "SEPT", "82")).unwrap();
        assert_eq!(record.magazine, "Oui");
        assert_eq!(record.month_full, "September");
        assert_eq!(record.year, Some(1982));
        assert_eq!(record.year_input, "82");
    }

    #[test]
    fn test_rejects_missing_magazine() {
        assert!(validate_entry(&fields("  ", "mar", "75")).is_err());
    }

    #[test]
    fn test_rejects_unknown_month() {
        let err = validate_entry(&fields("Oui", "Holiday", "75")).unwrap_err();
        assert!(err.to_string().contains("Holiday"));
    }

    #[test]
    fn test_rejects_unresolvable_year() {
        assert!(validate_entry(&fields("Oui", "mar", "abc")).is_err());
        assert!(validate_entry(&fields("Oui", "mar", "1850")).is_err());
    }
}
