//! Date display helpers

use chrono::NaiveDate;

/// Format a date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "MMM YYYY") // -> "Jan 2024"
/// ```
pub fn format_date(date: &NaiveDate, format: &str) -> String {
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Short list form used by the essay index ("Jan 2024")
pub fn list_date(date: &NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Full form used by the reader overlay ("Jan 15, 2024")
pub fn full_date(date: &NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Convert a Moment.js format string to a chrono one
fn moment_to_chrono_format(format: &str) -> String {
    // Longest patterns first so e.g. MMM is not consumed by MM
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DD", "%d"),
        // Day of month without leading zero
        ("D", "%-d"),
    ];

    let mut result = format.to_string();
    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&date(), "YYYY-MM-DD"), "2024-01-15");
        assert_eq!(format_date(&date(), "MMM YYYY"), "Jan 2024");
        assert_eq!(format_date(&date(), "MMM D, YYYY"), "Jan 15, 2024");
    }

    #[test]
    fn test_list_and_full_forms() {
        assert_eq!(list_date(&date()), "Jan 2024");
        assert_eq!(full_date(&date()), "Jan 15, 2024");
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("MMMM D"), "%B %-d");
    }
}
