//! General-purpose string primitives.
//!
//! The named rules in [`validators`](crate::validators) delegate to these
//! without adding constraints of their own.

use chrono::{DateTime, Timelike};

/// Returns `true` if `input` is non-empty and consists of ASCII digits only.
///
/// Signs, decimal points and non-ASCII numerals are rejected.
#[must_use]
pub fn is_numeric(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Returns `true` if `input` is non-empty and unchanged by Unicode lowercase
/// mapping.
///
/// Characters without case (digits, punctuation) do not affect the result.
#[must_use]
pub fn is_lowercase(input: &str) -> bool {
    !input.is_empty() && input.to_lowercase() == input
}

/// Returns `true` if `input` equals one of `allowed` exactly.
#[must_use]
pub fn is_member<S: AsRef<str>>(input: &str, allowed: &[S]) -> bool {
    allowed.iter().any(|candidate| candidate.as_ref() == input)
}

/// Textual timestamp layouts understood by [`is_valid_time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeFormat {
    /// `2006-01-02T15:04:05Z07:00`, with optional fractional seconds.
    #[default]
    Rfc3339,
    /// `Mon, 02 Jan 2006 15:04:05 -0700`.
    Rfc2822,
}

/// Returns `true` if `input` parses as a timestamp in `format`.
///
/// RFC 3339 input must use an uppercase `T` separator and an uppercase `Z`
/// offset. Leap seconds (`:60`) are rejected.
#[must_use]
pub fn is_valid_time(input: &str, format: TimeFormat) -> bool {
    match format {
        TimeFormat::Rfc3339 => is_strict_rfc3339(input),
        TimeFormat::Rfc2822 => DateTime::parse_from_rfc2822(input).is_ok(),
    }
}

fn is_strict_rfc3339(input: &str) -> bool {
    if input.as_bytes().get(10) != Some(&b'T') || input.ends_with('z') {
        return false;
    }
    // chrono folds second 60 into the nanosecond field
    DateTime::parse_from_rfc3339(input).is_ok_and(|dt| dt.nanosecond() < 1_000_000_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("0"));
        assert!(is_numeric("0123456789"));
        assert!(!is_numeric(""));
        assert!(!is_numeric("-1"));
        assert!(!is_numeric("+1"));
        assert!(!is_numeric("1.0"));
        assert!(!is_numeric("١٢٣"));
    }

    #[test]
    fn test_is_lowercase() {
        assert!(is_lowercase("hello"));
        assert!(is_lowercase("hello-world_42"));
        assert!(is_lowercase("straße"));
        assert!(is_lowercase("123"));
        assert!(!is_lowercase("Hello"));
        assert!(!is_lowercase("ÉCOLE"));
        assert!(!is_lowercase(""));
    }

    #[test]
    fn test_is_member() {
        let allowed = ["android", "ios", "web"];
        assert!(is_member("ios", &allowed));
        assert!(!is_member("IOS", &allowed));
        assert!(!is_member("", &allowed));
        assert!(!is_member::<&str>("ios", &[]));
        assert!(is_member("", &[""]));

        let owned = vec!["web".to_string()];
        assert!(is_member("web", &owned));
    }

    #[test]
    fn test_is_valid_time() {
        assert!(is_valid_time("2006-01-02T15:04:05Z", TimeFormat::Rfc3339));
        assert!(is_valid_time("2006-01-02T15:04:05.999+07:00", TimeFormat::Rfc3339));
        assert!(!is_valid_time("2006-01-02", TimeFormat::Rfc3339));
        assert!(!is_valid_time("2006-01-02T15:04:05", TimeFormat::Rfc3339));
        assert!(!is_valid_time("2006-13-02T15:04:05Z", TimeFormat::Rfc3339));
        assert!(!is_valid_time("", TimeFormat::Rfc3339));

        assert!(!is_valid_time("2006-01-02 15:04:05Z", TimeFormat::Rfc3339));
        assert!(!is_valid_time("2006-01-02t15:04:05Z", TimeFormat::Rfc3339));
        assert!(!is_valid_time("2006-01-02T15:04:05z", TimeFormat::Rfc3339));
        assert!(!is_valid_time("2016-12-31T23:59:60Z", TimeFormat::Rfc3339));
        assert!(is_valid_time("2016-12-31T23:59:59.999999999Z", TimeFormat::Rfc3339));

        assert!(is_valid_time("Mon, 02 Jan 2006 15:04:05 -0700", TimeFormat::Rfc2822));
        assert!(!is_valid_time("2006-01-02T15:04:05Z", TimeFormat::Rfc2822));
    }
}
