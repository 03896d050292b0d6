//! UUID v4 in its 32-digit compact form (no hyphens).

use std::sync::LazyLock;

use regex::Regex;

use crate::validators::format::{Format, LengthBound, compile};

// 8-4-4-4-12 layout with hyphens removed: the version nibble is the 13th
// digit, the RFC 4122 variant nibble is the 17th.
static UUID4_COMPACT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[0-9a-f]{12}4[0-9a-f]{3}[89ab][0-9a-f]{15}$"));

static UUID4_COMPACT: Format = Format::new(
    "uuid4_without_hyphens",
    &UUID4_COMPACT_REGEX,
    LengthBound::Exactly(32),
);

crate::validator! {
    /// Lowercase hyphen-less UUID v4.
    ///
    /// ```
    /// use inputguard_validator::validators::uuid4_without_hyphens;
    /// use inputguard_validator::foundation::Validate;
    ///
    /// assert!(uuid4_without_hyphens().is_valid("0f8fad5bd9cb469fa16570867728950e"));
    /// assert!(!uuid4_without_hyphens().is_valid("0f8fad5b-d9cb-469f-a165-70867728950e"));
    /// ```
    pub CompactUuidV4 for str;
    rule(input) { UUID4_COMPACT.matches(input) }
    error(input) { UUID4_COMPACT.explain(input) }
    fn uuid4_without_hyphens();
}
