//! Formatting utilities for paths, file sizes, dates, and other display values.

use crate::config::{display, size};

// =============================================================================
// Paths
// =============================================================================

/// Non-empty segments of a slash-delimited path.
pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Normalize a path: no leading, trailing, or doubled slashes.
pub fn normalize_path(path: &str) -> String {
    path_segments(path).collect::<Vec<_>>().join("/")
}

/// Append a child name to a path (`""` is the root).
pub fn join_path(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", base, name)
    }
}

/// Whether `ancestor` is `path` itself or one of its ancestors.
///
/// Both paths must be normalized. The root `""` is everyone's ancestor.
pub fn is_ancestor_or_self(ancestor: &str, path: &str) -> bool {
    ancestor.is_empty()
        || path == ancestor
        || path
            .strip_prefix(ancestor)
            .is_some_and(|rest| rest.starts_with('/'))
}

// =============================================================================
// Display Values
// =============================================================================

/// Format a byte count as megabytes with fixed precision (e.g., "3.000").
pub fn format_megabytes(bytes: u64) -> String {
    format!(
        "{:.*}",
        size::MEGABYTE_PRECISION,
        bytes as f64 / size::BYTES_PER_MEGABYTE
    )
}

/// Cut a name to `budget` characters, marking the cut with an ellipsis.
pub fn truncate_name(name: &str, budget: usize) -> String {
    match name.char_indices().nth(budget) {
        Some((cut, _)) => format!("{}{}", &name[..cut], display::ELLIPSIS),
        None => name.to_string(),
    }
}

/// Count with a naively pluralized noun ("1 item", "3 items").
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Format Unix timestamp as ISO date (YYYY-MM-DD).
///
/// Properly calculates year/month/day accounting for leap years.
pub fn format_date_iso(timestamp: u64) -> String {
    let days = timestamp / 86400;
    let mut year = 1970i64;
    let mut remaining_days = days as i64;

    loop {
        let days_in_year = if is_leap_year(year) { 366 } else { 365 };
        if remaining_days < days_in_year {
            break;
        }
        remaining_days -= days_in_year;
        year += 1;
    }

    let days_in_months: [i64; 12] = if is_leap_year(year) {
        [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    } else {
        [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]
    };

    let mut month = 1;
    for days_in_month in days_in_months.iter() {
        if remaining_days < *days_in_month {
            break;
        }
        remaining_days -= days_in_month;
        month += 1;
    }

    let day = remaining_days + 1;
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Check if a year is a leap year.
fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "");
        assert_eq!(normalize_path("/"), "");
        assert_eq!(normalize_path("/a//b/"), "a/b");
        assert_eq!(normalize_path("a/b/c"), "a/b/c");
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("", "a"), "a");
        assert_eq!(join_path("a/b", "c"), "a/b/c");
    }

    #[test]
    fn test_is_ancestor_or_self() {
        assert!(is_ancestor_or_self("", "a/b"));
        assert!(is_ancestor_or_self("a", "a/b"));
        assert!(is_ancestor_or_self("a/b", "a/b"));
        assert!(!is_ancestor_or_self("a/b", "a"));
        assert!(!is_ancestor_or_self("a", "ab"));
        assert!(!is_ancestor_or_self("x", "a"));
    }

    #[test]
    fn test_format_megabytes() {
        assert_eq!(format_megabytes(3_145_728), "3.000");
        assert_eq!(format_megabytes(0), "0.000");
        assert_eq!(format_megabytes(1_048_576 / 2), "0.500");
        assert_eq!(format_megabytes(52_428_800), "50.000");
    }

    #[test]
    fn test_truncate_name() {
        assert_eq!(truncate_name("short", 20), "short");
        assert_eq!(truncate_name("exactly-twenty-chars", 20), "exactly-twenty-chars");
        assert_eq!(
            truncate_name("a-very-long-file-name.png", 20),
            "a-very-long-file-nam..."
        );
        // Counts characters, not bytes
        assert_eq!(truncate_name("ééééé", 3), "ééé...");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "item"), "0 items");
        assert_eq!(pluralize(1, "item"), "1 item");
        assert_eq!(pluralize(7, "item"), "7 items");
    }

    #[test]
    fn test_format_date_iso() {
        assert_eq!(format_date_iso(0), "1970-01-01");
        assert_eq!(format_date_iso(1704067200), "2024-01-01");
    }
}
