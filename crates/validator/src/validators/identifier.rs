//! Identifier-like formats: separated alphanumeric ids, tags, language codes
//! and topic names.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;
use crate::validators::format::{Format, LengthBound, compile};

static ALPHANUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[a-zA-Z0-9]+([_:-][a-zA-Z0-9]+)*$"));

static HYPHENATED_WORDS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[a-zA-Z]+(-[a-zA-Z]+)*$"));

static TOPIC_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(r"^[A-Z]+(_[A-Z]+)*$"));

/// Maximum tag length.
pub const TAG_MAX_LENGTH: usize = 30;

static TAG: Format = Format::new(
    "tag",
    &HYPHENATED_WORDS_REGEX,
    LengthBound::AtMost(TAG_MAX_LENGTH),
);
static LANGUAGE: Format = Format::new(
    "language",
    &HYPHENATED_WORDS_REGEX,
    LengthBound::AtMost(256),
);
static TOPIC: Format = Format::new("topic", &TOPIC_REGEX, LengthBound::AtMost(256));

// ============================================================================
// ALPHANUMERIC IDENTIFIER
// ============================================================================

crate::validator! {
    /// Alphanumeric runs joined by single `_`, `:` or `-` separators.
    ///
    /// Doubled, leading or trailing separators are rejected. The length bound
    /// is optional and counts chars.
    ///
    /// ```
    /// use inputguard_validator::validators::{AlphanumericIdentifier, alphanumeric};
    /// use inputguard_validator::foundation::Validate;
    ///
    /// assert!(alphanumeric().is_valid("abc_1:23"));
    /// assert!(!alphanumeric().is_valid("abc--123"));
    /// assert!(!AlphanumericIdentifier::with_max_length(5).is_valid("abc-123"));
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash, Default)]
    pub AlphanumericIdentifier { max_length: Option<usize> } for str;
    rule(self, input) {
        ALPHANUMERIC_REGEX.is_match(input) && self.bound().admits(input.chars().count())
    }
    error(self, input) {
        if ALPHANUMERIC_REGEX.is_match(input) {
            self.bound()
                .check("alphanumeric", input.chars().count())
                .err()
                .unwrap_or_else(|| ValidationError::invalid_format("alphanumeric"))
        } else {
            ValidationError::invalid_format("alphanumeric")
        }
    }
    new() { Self { max_length: None } }
    fn alphanumeric();
}

impl AlphanumericIdentifier {
    /// Identifier limited to `max_length` chars.
    #[must_use]
    pub fn with_max_length(max_length: usize) -> Self {
        Self {
            max_length: Some(max_length),
        }
    }

    fn bound(&self) -> LengthBound {
        self.max_length
            .map_or(LengthBound::Unbounded, LengthBound::AtMost)
    }
}

// ============================================================================
// TAG / LANGUAGE / TOPIC
// ============================================================================

crate::validator! {
    /// ASCII letter runs joined by single hyphens, at most 30 chars.
    pub Tag for str;
    rule(input) { TAG.matches(input) }
    error(input) { TAG.explain(input) }
    fn tag();
}

crate::validator! {
    /// Language code: ASCII letter runs joined by single hyphens, at most 256
    /// chars. Subtags are not checked against any registry.
    pub Language for str;
    rule(input) { LANGUAGE.matches(input) }
    error(input) { LANGUAGE.explain(input) }
    fn language();
}

crate::validator! {
    /// Topic name: uppercase ASCII runs joined by single underscores, at most
    /// 256 chars.
    pub Topic for str;
    rule(input) { TOPIC.matches(input) }
    error(input) { TOPIC.explain(input) }
    fn topic();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_alphanumeric_separators() {
        let v = alphanumeric();
        assert!(v.is_valid("abc-123"));
        assert!(v.is_valid("abc_1:23"));
        assert!(v.is_valid("A1"));
        assert!(!v.is_valid("abc--123"));
        assert!(!v.is_valid("abc_:123"));
        assert!(!v.is_valid("-abc"));
        assert!(!v.is_valid("abc-"));
        assert!(!v.is_valid("abc 123"));
        assert!(!v.is_valid("ábc"));
        assert!(!v.is_valid(""));
    }

    #[test]
    fn test_alphanumeric_max_length() {
        let v = AlphanumericIdentifier::with_max_length(7);
        assert!(v.is_valid("abc-123"));
        let err = v.validate("abc-1234").unwrap_err();
        assert_eq!(err.code, "max_length");
        assert_eq!(err.param("max"), Some("7"));

        let err = v.validate("abc--1").unwrap_err();
        assert_eq!(err.code, "invalid_format");
    }

    #[test]
    fn test_tag() {
        assert!(tag().is_valid("machine-learning"));
        assert!(tag().is_valid(&"a".repeat(30)));
        assert!(!tag().is_valid(&"a".repeat(31)));
        assert!(!tag().is_valid("machine_learning"));
        assert!(!tag().is_valid("web3"));
        assert_eq!(
            tag().validate(&"a".repeat(31)).unwrap_err().code,
            "max_length"
        );
    }

    #[test]
    fn test_language() {
        assert!(language().is_valid("en"));
        assert!(language().is_valid("en-US"));
        assert!(language().is_valid("zh-Hant-TW"));
        assert!(!language().is_valid("en_US"));
        assert!(!language().is_valid("en--US"));
        assert!(language().is_valid(&"a".repeat(256)));
        assert!(!language().is_valid(&"a".repeat(257)));
    }

    #[test]
    fn test_topic() {
        assert!(topic().is_valid("USER_CREATED"));
        assert!(topic().is_valid("PAYMENT"));
        assert!(!topic().is_valid("user_created"));
        assert!(!topic().is_valid("USER__CREATED"));
        assert!(!topic().is_valid("USER-CREATED"));
        assert!(!topic().is_valid("_USER"));
    }
}
