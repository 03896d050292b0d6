//! Timestamps and date-bearing strings.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;
use crate::primitives::{TimeFormat, is_valid_time};
use crate::validators::format::compile;

// Unanchored: any string containing a YYYY-MM-DD run passes.
static LOOSE_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile(r"[0-9]{4}-[0-9]{2}-[0-9]{2}"));

crate::validator! {
    /// RFC 3339 timestamp, e.g. `2024-05-01T12:30:00Z`.
    ///
    /// ```
    /// use inputguard_validator::validators::timestamp;
    /// use inputguard_validator::foundation::Validate;
    ///
    /// assert!(timestamp().is_valid("2024-05-01T12:30:00.250+02:00"));
    /// assert!(!timestamp().is_valid("2024-05-01 noon"));
    /// ```
    pub Timestamp for str;
    rule(input) { is_valid_time(input, TimeFormat::Rfc3339) }
    error(input) { ValidationError::invalid_format("time") }
    fn timestamp();
}

crate::validator! {
    /// Passes when the input *contains* a `YYYY-MM-DD` digit run anywhere.
    ///
    /// This is a loose check: the match is not anchored and the digits are
    /// not checked against the calendar, so `"due 9999-99-99!"` passes.
    /// Callers needing a real date should parse it with [`Timestamp`] or a
    /// date library.
    pub LooseDate for str;
    rule(input) { LOOSE_DATE_REGEX.is_match(input) }
    error(input) { ValidationError::invalid_format("date") }
    fn loose_date();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_timestamp() {
        assert!(timestamp().is_valid("2006-01-02T15:04:05Z"));
        assert!(timestamp().is_valid("2006-01-02T15:04:05-07:00"));
        assert!(!timestamp().is_valid("2006-01-02"));
        assert!(!timestamp().is_valid("15:04:05"));
        assert!(!timestamp().is_valid(""));
        assert_eq!(
            timestamp().validate("yesterday").unwrap_err().param("expected"),
            Some("time")
        );
    }

    #[test]
    fn test_loose_date_is_unanchored() {
        assert!(loose_date().is_valid("2024-05-01"));
        assert!(loose_date().is_valid("released on 2024-05-01 at noon"));
        assert!(loose_date().is_valid("12024-05-011"));
        assert!(loose_date().is_valid("9999-99-99"));
    }

    #[test]
    fn test_loose_date_rejects() {
        assert!(!loose_date().is_valid("2024/05/01"));
        assert!(!loose_date().is_valid("24-05-01"));
        assert!(!loose_date().is_valid("2024-5-1"));
        assert!(!loose_date().is_valid("٢٠٢٤-٠٥-٠١"));
        assert!(!loose_date().is_valid(""));
    }
}
