//! Column and chronological ordering.
//!
//! Both sorts are stable: records with equal keys keep their input order,
//! in either direction.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::normalize::month_ordinal;
use crate::storage::Record;

/// Sort key for unrecognized months; above every real month position.
const UNKNOWN_MONTH: usize = 999;

/// A sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Magazine,
    Month,
    Year,
    Special,
    Created,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::Magazine,
        SortColumn::Month,
        SortColumn::Year,
        SortColumn::Special,
        SortColumn::Created,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::Magazine => "magazine",
            SortColumn::Month => "month",
            SortColumn::Year => "year",
            SortColumn::Special => "special",
            SortColumn::Created => "created",
        }
    }

    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            SortColumn::Magazine => a.magazine.to_lowercase().cmp(&b.magazine.to_lowercase()),
            SortColumn::Month => month_key(a).cmp(&month_key(b)),
            SortColumn::Year => a.year.unwrap_or(0).cmp(&b.year.unwrap_or(0)),
            SortColumn::Special => special_key(a).cmp(&special_key(b)),
            SortColumn::Created => a.created_millis().cmp(&b.created_millis()),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = CatalogError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        SortColumn::ALL
            .into_iter()
            .find(|column| column.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                CatalogError::InvalidInput(format!(
                    "Unknown sort column '{}'. Expected one of: magazine, month, year, special, created",
                    value
                ))
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

fn month_key(record: &Record) -> usize {
    month_ordinal(&record.month_full).unwrap_or(UNKNOWN_MONTH)
}

fn special_key(record: &Record) -> String {
    let flag = if record.is_special { '1' } else { '0' };
    let mut key = record.special.to_lowercase();
    key.push(flag);
    key
}

/// Records ordered by one column.
pub fn sort_by_column(records: &[Record], column: SortColumn, direction: SortDirection) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = column.compare(a, b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Records ordered by year, then calendar month.
///
/// Missing years count as 0. Within a year, unrecognized months follow the
/// recognized ones and tie with each other.
pub fn sort_chronological(records: &[Record]) -> Vec<Record> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        a.year
            .unwrap_or(0)
            .cmp(&b.year.unwrap_or(0))
            .then_with(|| month_key(a).cmp(&month_key(b)))
    });
    sorted
}

/// Ordering currently applied to a record view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum SortState {
    /// Store order
    #[default]
    Unsorted,
    Column {
        column: SortColumn,
        direction: SortDirection,
    },
    Chronological,
}

impl SortState {
    /// Select a column: the active column flips direction, any other starts ascending.
    pub fn click_column(self, column: SortColumn) -> Self {
        let direction = match self {
            SortState::Column {
                column: active,
                direction,
            } if active == column => direction.reversed(),
            _ => SortDirection::Asc,
        };
        SortState::Column { column, direction }
    }

    /// Switch to chronological order, dropping any column selection.
    pub fn activate_chronological(self) -> Self {
        SortState::Chronological
    }

    /// Order `records` according to this state.
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        match *self {
            SortState::Unsorted => records.to_vec(),
            SortState::Column { column, direction } => sort_by_column(records, column, direction),
            SortState::Chronological => sort_chronological(records),
        }
    }
}
