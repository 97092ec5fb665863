//! Core data types for the storage layer.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::normalize::{
    derive_abbr, display_month, display_year_from_input, normalize_month, resolve_year,
};

/// A stored magazine issue.
///
/// Field names serialize in camelCase so backups stay compatible with
/// catalogs exported by earlier versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Store-assigned identifier, never reused
    pub id: i64,

    /// Publication name (e.g. "Playboy")
    pub magazine: String,

    /// Canonical month name, or the raw token when it could not be normalized
    pub month_full: String,

    /// Lowercased three-letter prefix of `month_full`
    pub month_abbr: String,

    /// Four-digit year, if one could be resolved
    pub year: Option<i32>,

    /// Year exactly as entered or imported
    pub year_input: String,

    /// Free-text note for special issues
    pub special: String,

    /// Special-issue flag, independent of `special`
    pub is_special: bool,

    /// ISO-8601 creation timestamp
    pub created: String,
}

impl Record {
    /// Year as a front end should show it.
    ///
    /// Falls back to a lenient reading of `year_input`, then the raw input,
    /// then `"N/A"`.
    pub fn display_year(&self) -> String {
        if let Some(year) = self.year {
            return year.to_string();
        }
        if let Some(parsed) = display_year_from_input(&self.year_input) {
            return parsed.to_string();
        }
        if !self.year_input.is_empty() {
            return self.year_input.clone();
        }
        "N/A".to_string()
    }

    /// Month as a front end should show it, preferring `month_full` over `month_abbr`.
    pub fn display_month(&self) -> String {
        let full = self.month_full.trim();
        if !full.is_empty() {
            return display_month(full);
        }
        let abbr = self.month_abbr.trim();
        if !abbr.is_empty() {
            return display_month(abbr);
        }
        String::new()
    }

    /// Year value to pre-fill when editing: the raw input, else the last two digits.
    pub fn year_for_editing(&self) -> String {
        if !self.year_input.is_empty() {
            return self.year_input.clone();
        }
        match self.year {
            Some(year) => {
                let text = year.to_string();
                text[text.len().saturating_sub(2)..].to_string()
            }
            None => String::new(),
        }
    }

    /// Creation time in epoch milliseconds, or 0 when `created` does not parse.
    pub fn created_millis(&self) -> i64 {
        parse_timestamp_millis(&self.created).unwrap_or(0)
    }
}

/// Field set for creating or replacing a record.
///
/// Stores derive `month_abbr` from `month_full` on every write. Only a
/// record without `month_full` keeps a `legacy_abbr` carried over from
/// older backups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub magazine: String,
    pub month_full: String,

    /// Abbreviation to keep when `month_full` is empty
    pub legacy_abbr: Option<String>,

    pub year: Option<i32>,
    pub year_input: String,
    pub special: String,
    pub is_special: bool,

    /// Creation timestamp; stores stamp the current time when `None`.
    /// Ignored by updates, which keep the original value.
    pub created: Option<String>,
}

impl NewRecord {
    pub fn new(magazine: impl Into<String>, month_full: impl Into<String>) -> Self {
        Self {
            magazine: magazine.into(),
            month_full: month_full.into(),
            legacy_abbr: None,
            year: None,
            year_input: String::new(),
            special: String::new(),
            is_special: false,
            created: None,
        }
    }

    /// Build a record from hand-entered text, normalizing month and year.
    pub fn from_input(magazine: &str, month: &str, year: &str) -> Self {
        let year_input = year.trim();
        Self::new(magazine.trim(), normalize_month(month))
            .with_year(resolve_year(year_input), year_input)
    }

    pub fn with_year(mut self, year: Option<i32>, year_input: impl Into<String>) -> Self {
        self.year = year;
        self.year_input = year_input.into();
        self
    }

    pub fn with_special(mut self, special: impl Into<String>, is_special: bool) -> Self {
        self.special = special.into();
        self.is_special = is_special;
        self
    }

    pub fn with_created(mut self, created: impl Into<String>) -> Self {
        self.created = Some(created.into());
        self
    }

    pub fn with_legacy_abbr(mut self, abbr: impl Into<String>) -> Self {
        let abbr = abbr.into();
        self.legacy_abbr = (!abbr.trim().is_empty()).then_some(abbr);
        self
    }

    /// Abbreviation a store persists alongside `month_full`.
    pub fn month_abbr(&self) -> String {
        match &self.legacy_abbr {
            Some(abbr) if self.month_full.trim().is_empty() => abbr.clone(),
            _ => derive_abbr(&self.month_full),
        }
    }

    /// Materialize into a stored record with the given id and timestamp.
    pub fn into_record(self, id: i64, created: String) -> Record {
        let month_abbr = self.month_abbr();
        Record {
            id,
            magazine: self.magazine,
            month_full: self.month_full,
            month_abbr,
            year: self.year,
            year_input: self.year_input,
            special: self.special,
            is_special: self.is_special,
            created,
        }
    }
}

impl From<&Record> for NewRecord {
    fn from(record: &Record) -> Self {
        Self {
            magazine: record.magazine.clone(),
            month_full: record.month_full.clone(),
            legacy_abbr: (!record.month_abbr.is_empty()).then(|| record.month_abbr.clone()),
            year: record.year,
            year_input: record.year_input.clone(),
            special: record.special.clone(),
            is_special: record.is_special,
            created: Some(record.created.clone()),
        }
    }
}

/// Current time in the ISO-8601 form used for `created` (millisecond precision, `Z` suffix).
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an ISO-8601 timestamp (or a bare date) into epoch milliseconds.
pub fn parse_timestamp_millis(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.timestamp_millis());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc().timestamp_millis());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc().timestamp_millis());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        NewRecord::new("Playboy", "March")
            .with_year(Some(1975), "75")
            .into_record(1, "2024-01-01T00:00:00.000Z".to_string())
    }

    #[test]
    fn test_new_record_builder() {
        let new = NewRecord::from_input(" Oui ", "sept", "82")
            .with_special("Anniversary", true)
            .with_created("2020-05-01T10:00:00Z");

        assert_eq!(new.magazine, "Oui");
        assert_eq!(new.month_full, "September");
        assert_eq!(new.month_abbr(), "sep");
        assert_eq!(new.year, Some(1982));
        assert_eq!(new.year_input, "82");
        assert!(new.is_special);
        assert_eq!(new.created.as_deref(), Some("2020-05-01T10:00:00Z"));
    }

    #[test]
    fn test_into_record_derives_abbr() {
        let stored = record();
        assert_eq!(stored.month_abbr, "mar");
        assert_eq!(stored.id, 1);
    }

    #[test]
    fn test_legacy_abbr_only_applies_without_month_full() {
        let legacy = NewRecord::new("Oui", "").with_legacy_abbr("jun");
        assert_eq!(legacy.month_abbr(), "jun");
        assert_eq!(legacy.clone().into_record(1, String::new()).display_month(), "June");

        let current = NewRecord::new("Oui", "March").with_legacy_abbr("jun");
        assert_eq!(current.month_abbr(), "mar");

        assert_eq!(NewRecord::new("Oui", "").with_legacy_abbr("  ").legacy_abbr, None);
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let value = serde_json::to_value(record()).unwrap();
        assert_eq!(value["monthFull"], "March");
        assert_eq!(value["monthAbbr"], "mar");
        assert_eq!(value["yearInput"], "75");
        assert_eq!(value["isSpecial"], false);
    }

    #[test]
    fn test_display_year_fallbacks() {
        let mut rec = record();
        assert_eq!(rec.display_year(), "1975");

        rec.year = None;
        rec.year_input = "12".to_string();
        assert_eq!(rec.display_year(), "2012");

        rec.year_input = "Spring".to_string();
        assert_eq!(rec.display_year(), "Spring");

        rec.year_input = String::new();
        assert_eq!(rec.display_year(), "N/A");
    }

    #[test]
    fn test_display_month_falls_back_to_abbr() {
        let mut rec = record();
        rec.month_full = "dec".to_string();
        assert_eq!(rec.display_month(), "December");

        rec.month_full = String::new();
        rec.month_abbr = "jun".to_string();
        assert_eq!(rec.display_month(), "June");

        rec.month_abbr = "xyz".to_string();
        assert_eq!(rec.display_month(), "xyz");
    }

    #[test]
    fn test_year_for_editing() {
        let mut rec = record();
        assert_eq!(rec.year_for_editing(), "75");
        rec.year_input = String::new();
        assert_eq!(rec.year_for_editing(), "75");
        rec.year = None;
        assert_eq!(rec.year_for_editing(), "");
    }

    #[test]
    fn test_created_millis() {
        let mut rec = record();
        assert_eq!(rec.created_millis(), 1_704_067_200_000);
        rec.created = "2024-01-01".to_string();
        assert_eq!(rec.created_millis(), 1_704_067_200_000);
        rec.created = "yesterday".to_string();
        assert_eq!(rec.created_millis(), 0);
    }
}
