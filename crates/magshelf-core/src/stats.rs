//! Summary counts over the catalog.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::normalize::month_ordinal;
use crate::storage::Record;

/// Aggregate counts for a record set.
///
/// Records missing a magazine, year, or month are left out of that
/// grouping but still counted in `total`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total: usize,
    pub by_magazine: BTreeMap<String, usize>,
    pub by_year: BTreeMap<i32, usize>,
    pub by_month: BTreeMap<String, usize>,
    pub special: usize,

    /// Distinct years, ascending
    pub years: Vec<i32>,

    /// Distinct magazine names, ascending
    pub magazines: Vec<String>,
}

impl CatalogStats {
    /// Earliest and latest year present.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        Some((*self.years.first()?, *self.years.last()?))
    }

    /// Month names present, in calendar order. Unrecognized names follow, alphabetically.
    pub fn months_in_calendar_order(&self) -> Vec<String> {
        let mut months: Vec<String> = self.by_month.keys().cloned().collect();
        months.sort_by_key(|month| (month_ordinal(month).unwrap_or(usize::MAX), month.clone()));
        months
    }
}

/// Compute [`CatalogStats`] in one pass over `records`.
pub fn compute_stats(records: &[Record]) -> CatalogStats {
    let mut stats = CatalogStats {
        total: records.len(),
        ..CatalogStats::default()
    };

    for record in records {
        if !record.magazine.is_empty() {
            *stats.by_magazine.entry(record.magazine.clone()).or_insert(0) += 1;
        }
        if let Some(year) = record.year {
            *stats.by_year.entry(year).or_insert(0) += 1;
        }
        if !record.month_full.is_empty() {
            *stats.by_month.entry(record.month_full.clone()).or_insert(0) += 1;
        }
        if record.is_special {
            stats.special += 1;
        }
    }

    stats.years = stats.by_year.keys().copied().collect();
    stats.magazines = stats.by_magazine.keys().cloned().collect();
    stats
}
