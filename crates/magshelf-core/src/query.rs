//! Record filtering.
//!
//! A [`RecordFilter`] is a conjunction of optional predicates. Unset fields,
//! and text fields set to the empty string, do not constrain the result.

use crate::storage::Record;

/// Filter for querying records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Exact magazine name
    pub magazine: Option<String>,

    /// Exact year; ignored when either range bound is set
    pub year: Option<i32>,

    /// Lower year bound (inclusive)
    pub year_from: Option<i32>,

    /// Upper year bound (inclusive)
    pub year_to: Option<i32>,

    /// Exact `month_full`
    pub month: Option<String>,

    /// Keep only records flagged special
    pub special_only: bool,

    /// Case-insensitive substring over magazine, special text, month, and year
    pub search: Option<String>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn magazine(mut self, magazine: impl Into<String>) -> Self {
        self.magazine = Some(magazine.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn year_from(mut self, year: i32) -> Self {
        self.year_from = Some(year);
        self
    }

    pub fn year_to(mut self, year: i32) -> Self {
        self.year_to = Some(year);
        self
    }

    pub fn month(mut self, month: impl Into<String>) -> Self {
        self.month = Some(month.into());
        self
    }

    pub fn special_only(mut self) -> Self {
        self.special_only = true;
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// True when no predicate is active.
    pub fn is_empty(&self) -> bool {
        active(&self.magazine).is_none()
            && self.year.is_none()
            && !self.has_range()
            && active(&self.month).is_none()
            && !self.special_only
            && active(&self.search).is_none()
    }

    fn has_range(&self) -> bool {
        self.year_from.is_some() || self.year_to.is_some()
    }

    /// Whether `record` passes every active predicate.
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(magazine) = active(&self.magazine) {
            if record.magazine != magazine {
                return false;
            }
        }

        if self.has_range() {
            let Some(year) = record.year else {
                return false;
            };
            if self.year_from.is_some_and(|from| year < from) {
                return false;
            }
            if self.year_to.is_some_and(|to| year > to) {
                return false;
            }
        } else if let Some(wanted) = self.year {
            if record.year != Some(wanted) {
                return false;
            }
        }

        if let Some(month) = active(&self.month) {
            if record.month_full != month {
                return false;
            }
        }

        if self.special_only && !record.is_special {
            return false;
        }

        if let Some(search) = active(&self.search) {
            return search_matches(record, &search.to_lowercase());
        }

        true
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|text| !text.is_empty())
}

fn search_matches(record: &Record, needle: &str) -> bool {
    let year = record.year.map(|y| y.to_string()).unwrap_or_default();
    [
        record.magazine.to_lowercase(),
        record.special.to_lowercase(),
        record.month_full.to_lowercase(),
        year,
    ]
    .iter()
    .any(|haystack| haystack.contains(needle))
}

/// Records passing `criteria`, in input order.
pub fn filter(records: &[Record], criteria: &RecordFilter) -> Vec<Record> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::NewRecord;

    fn rec(id: i64, magazine: &str, month: &str, year: Option<i32>) -> Record {
        NewRecord::new(magazine, month)
            .with_year(year, "")
            .into_record(id, "2024-01-01T00:00:00.000Z".to_string())
    }

    fn sample() -> Vec<Record> {
        let mut special = rec(4, "Oui", "Holiday", Some(2005));
        special.special = "Holiday Bonanza".to_string();
        special.is_special = true;
        vec![
            rec(1, "Playboy", "March", Some(1975)),
            rec(2, "Playboy", "June", None),
            rec(3, "Oui", "June", Some(2000)),
            special,
            rec(5, "Penthouse", "October", Some(2010)),
        ]
    }

    fn ids(records: &[Record]) -> Vec<i64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_filter_builder() {
        let criteria = RecordFilter::new()
            .magazine("Oui")
            .year_from(2000)
            .month("June")
            .special_only()
            .search("hol");

        assert_eq!(criteria.magazine.as_deref(), Some("Oui"));
        assert_eq!(criteria.year_from, Some(2000));
        assert!(criteria.special_only);
        assert!(!criteria.is_empty());
        assert!(RecordFilter::new().magazine("").is_empty());
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let records = sample();
        assert_eq!(filter(&records, &RecordFilter::new()), records);
    }

    #[test]
    fn test_year_range_excludes_missing_years() {
        let records = sample();
        let result = filter(&records, &RecordFilter::new().year_from(2000).year_to(2010));
        assert_eq!(ids(&result), vec![3, 4, 5]);

        let open_ended = filter(&records, &RecordFilter::new().year_to(2000));
        assert_eq!(ids(&open_ended), vec![1, 3]);
    }

    #[test]
    fn test_range_overrides_single_year() {
        let records = sample();
        let criteria = RecordFilter::new().year(1975).year_from(2005);
        assert_eq!(ids(&filter(&records, &criteria)), vec![4, 5]);

        assert_eq!(ids(&filter(&records, &RecordFilter::new().year(1975))), vec![1]);
    }

    #[test]
    fn test_exact_magazine_and_month() {
        let records = sample();
        assert_eq!(ids(&filter(&records, &RecordFilter::new().magazine("Playboy"))), vec![1, 2]);
        assert!(filter(&records, &RecordFilter::new().magazine("playboy")).is_empty());
        assert_eq!(ids(&filter(&records, &RecordFilter::new().month("June"))), vec![2, 3]);
    }

    #[test]
    fn test_special_only() {
        let records = sample();
        assert_eq!(ids(&filter(&records, &RecordFilter::new().special_only())), vec![4]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let records = sample();
        assert_eq!(ids(&filter(&records, &RecordFilter::new().search("PLAY"))), vec![1, 2]);
        assert_eq!(ids(&filter(&records, &RecordFilter::new().search("bonanza"))), vec![4]);
        assert_eq!(ids(&filter(&records, &RecordFilter::new().search("oct"))), vec![5]);
        assert_eq!(ids(&filter(&records, &RecordFilter::new().search("197"))), vec![1]);
    }

    #[test]
    fn test_search_matches_special_text_without_flag() {
        let mut unflagged = rec(6, "Playboy", "May", Some(1984));
        unflagged.special = "Anniversary Special".to_string();
        let mut records = sample();
        records.push(unflagged);

        assert_eq!(ids(&filter(&records, &RecordFilter::new().search("special"))), vec![6]);
        assert_eq!(ids(&filter(&records, &RecordFilter::new().special_only())), vec![4]);
    }

    #[test]
    fn test_filter_is_idempotent_and_preserves_order() {
        let mut records = sample();
        records.reverse();
        let criteria = RecordFilter::new().search("o");
        let once = filter(&records, &criteria);
        let twice = filter(&once, &criteria);
        assert_eq!(once, twice);

        let positions: Vec<usize> = once
            .iter()
            .map(|r| records.iter().position(|x| x.id == r.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
