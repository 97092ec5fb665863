//! Month and year normalization.
//!
//! Imported and hand-entered records carry months as abbreviations or full
//! names in any case, and years as either two or four digits. These helpers
//! turn those tokens into the canonical forms stored on a [`Record`].
//!
//! Month normalization has two entry points on purpose:
//! [`normalize_month`] returns an empty string when the token is unknown so
//! importers can detect the failure, while [`display_month`] hands back the
//! raw token so a front end always has something to show.
//!
//! [`Record`]: crate::storage::Record

/// The twelve canonical month names in calendar order.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Years at or above this two-digit value expand into the 1900s.
pub const YEAR_PIVOT: i32 = 50;

/// Lowest four-digit year accepted as-is.
pub const MIN_YEAR: i32 = 1900;

/// Highest four-digit year accepted as-is.
pub const MAX_YEAR: i32 = 2099;

/// Map a month token to its canonical full name, or `""` if unknown.
///
/// Accepts the twelve three-letter abbreviations, the `sept` variant, and
/// the full names, case-insensitively and ignoring surrounding whitespace.
pub fn normalize_month(raw: &str) -> String {
    lookup_month(raw).map(str::to_string).unwrap_or_default()
}

/// Map a month token to its canonical full name, or return it unchanged.
pub fn display_month(raw: &str) -> String {
    match lookup_month(raw) {
        Some(month) => month.to_string(),
        None => raw.to_string(),
    }
}

fn lookup_month(raw: &str) -> Option<&'static str> {
    let key = raw.trim().to_lowercase();
    let index = match key.as_str() {
        "jan" | "january" => 0,
        "feb" | "february" => 1,
        "mar" | "march" => 2,
        "apr" | "april" => 3,
        "may" => 4,
        "jun" | "june" => 5,
        "jul" | "july" => 6,
        "aug" | "august" => 7,
        "sep" | "sept" | "september" => 8,
        "oct" | "october" => 9,
        "nov" | "november" => 10,
        "dec" | "december" => 11,
        _ => return None,
    };
    Some(MONTHS[index])
}

/// Lowercased first three characters of a full month name.
pub fn derive_abbr(full: &str) -> String {
    full.chars().take(3).collect::<String>().to_lowercase()
}

/// Whether a stored abbreviation agrees with its full month name.
///
/// Records without a full month may keep any abbreviation.
pub fn abbr_in_sync(full: &str, abbr: &str) -> bool {
    full.trim().is_empty() || derive_abbr(full) == abbr
}

/// Zero-based calendar position of a month name (case-insensitive, full names only).
pub fn month_ordinal(month_full: &str) -> Option<usize> {
    MONTHS
        .iter()
        .position(|month| month.eq_ignore_ascii_case(month_full))
}

/// Resolve a raw year token into a four-digit year.
///
/// Values 1900-2099 pass through, values 1-99 are expanded with the pivot
/// rule (`< 50` lands in the 2000s, otherwise the 1900s). Anything else,
/// including non-numeric text, zero, negatives, three-digit values, and
/// years from 2100 on, is unresolved.
pub fn resolve_year(raw: &str) -> Option<i32> {
    let parsed = parse_leading_int(raw)?;
    if parsed <= 0 {
        return None;
    }
    if (MIN_YEAR as i64..=MAX_YEAR as i64).contains(&parsed) {
        return Some(parsed as i32);
    }
    if parsed < 100 {
        return Some(expand_two_digit(parsed as i32));
    }
    None
}

/// Lenient year resolution used when rendering a stored `yearInput`.
///
/// Two-digit values get the pivot rule; any other positive value is shown
/// as parsed.
pub fn display_year_from_input(raw: &str) -> Option<i64> {
    let parsed = parse_leading_int(raw)?;
    if parsed <= 0 {
        return None;
    }
    if parsed < 100 {
        return Some(i64::from(expand_two_digit(parsed as i32)));
    }
    Some(parsed)
}

fn expand_two_digit(value: i32) -> i32 {
    if value < YEAR_PIVOT {
        2000 + value
    } else {
        1900 + value
    }
}

/// Parse the integer prefix of a token (`" 75abc"` -> 75).
fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_month_abbreviations_and_names() {
        assert_eq!(normalize_month("jan"), "January");
        assert_eq!(normalize_month("FEB"), "February");
        assert_eq!(normalize_month("  march "), "March");
        assert_eq!(normalize_month("May"), "May");
        assert_eq!(normalize_month("sept"), "September");
        assert_eq!(normalize_month("SEPT"), "September");
        assert_eq!(normalize_month("december"), "December");
    }

    #[test]
    fn test_normalize_month_unknown_is_empty() {
        assert_eq!(normalize_month("Smarch"), "");
        assert_eq!(normalize_month(""), "");
        assert_eq!(normalize_month("ja"), "");
    }

    #[test]
    fn test_display_month_passes_unknown_through() {
        assert_eq!(display_month("oct"), "October");
        assert_eq!(display_month("Holiday"), "Holiday");
        assert_eq!(display_month(" odd "), " odd ");
    }

    #[test]
    fn test_derive_abbr() {
        assert_eq!(derive_abbr(&normalize_month("SEPT")), "sep");
        assert_eq!(derive_abbr("January"), "jan");
        assert_eq!(derive_abbr("Holiday"), "hol");
        assert_eq!(derive_abbr("Ma"), "ma");
        assert_eq!(derive_abbr(""), "");
    }

    #[test]
    fn test_abbr_in_sync() {
        assert!(abbr_in_sync("March", "mar"));
        assert!(!abbr_in_sync("March", "jan"));
        assert!(abbr_in_sync("", "jun"));
        assert!(abbr_in_sync("", ""));
    }

    #[test]
    fn test_month_ordinal() {
        assert_eq!(month_ordinal("January"), Some(0));
        assert_eq!(month_ordinal("december"), Some(11));
        assert_eq!(month_ordinal("Dec"), None);
        assert_eq!(month_ordinal(""), None);
    }

    #[test]
    fn test_resolve_year_two_digit_pivot() {
        for v in 1..50 {
            assert_eq!(resolve_year(&v.to_string()), Some(2000 + v));
        }
        for v in 50..100 {
            assert_eq!(resolve_year(&v.to_string()), Some(1900 + v));
        }
        assert_eq!(resolve_year("07"), Some(2007));
    }

    #[test]
    fn test_resolve_year_four_digit_passthrough() {
        assert_eq!(resolve_year("1900"), Some(1900));
        assert_eq!(resolve_year("1975"), Some(1975));
        assert_eq!(resolve_year("2099"), Some(2099));
    }

    #[test]
    fn test_resolve_year_rejects_out_of_range() {
        assert_eq!(resolve_year("0"), None);
        assert_eq!(resolve_year("00"), None);
        assert_eq!(resolve_year("-5"), None);
        assert_eq!(resolve_year("150"), None);
        assert_eq!(resolve_year("1899"), None);
        assert_eq!(resolve_year("2100"), None);
        assert_eq!(resolve_year("12345"), None);
        assert_eq!(resolve_year("abc"), None);
        assert_eq!(resolve_year(""), None);
    }

    #[test]
    fn test_resolve_year_uses_integer_prefix() {
        assert_eq!(resolve_year(" 75 "), Some(1975));
        assert_eq!(resolve_year("1984 (reprint)"), Some(1984));
    }

    #[test]
    fn test_display_year_from_input_is_lenient() {
        assert_eq!(display_year_from_input("12"), Some(2012));
        assert_eq!(display_year_from_input("150"), Some(150));
        assert_eq!(display_year_from_input("2150"), Some(2150));
        assert_eq!(display_year_from_input("n/a"), None);
        assert_eq!(display_year_from_input("0"), None);
    }
}
