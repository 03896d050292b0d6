//! Flat boolean predicates, one per rule.
//!
//! Every function here is pure and total: any failure (pattern mismatch,
//! length violation, unparseable timestamp) is reported as `false`, never as
//! an error or panic. Use the typed validators in
//! [`validators`](crate::validators) when the reason matters, or [`Rule`]
//! when the rule is chosen by name at runtime.
//!
//! ```
//! use inputguard_validator::rules::{is_alphanumeric, is_password, is_tag};
//!
//! assert!(is_alphanumeric("abc_1:23", None));
//! assert!(!is_alphanumeric("abc-123", Some(6)));
//! assert!(is_tag("machine-learning"));
//! assert!(is_password("Passw0rd!"));
//! ```

mod registry;

pub use registry::{Rule, RuleError, check};

use crate::foundation::Validate;
use crate::primitives;
use crate::validators::{
    AlphanumericIdentifier, CompactUuidV4, ContainerImage, DisplayName, Email, JwtShape, Language,
    LooseDate, MemorySize, OrderNumber, PasswordPolicy, PasswordStrength, Path,
    PermissionResource, Tag, Timestamp, Topic, Url, UserDisplayName,
};

/// Alphanumeric runs joined by single `_`, `:` or `-`; `max_length` in chars.
#[must_use]
pub fn is_alphanumeric(input: &str, max_length: Option<usize>) -> bool {
    AlphanumericIdentifier { max_length }.is_valid(input)
}

/// Letter runs joined by single hyphens, at most 30 chars.
#[must_use]
pub fn is_tag(input: &str) -> bool {
    Tag.is_valid(input)
}

/// Letter runs joined by single hyphens, at most 256 chars.
#[must_use]
pub fn is_language(input: &str) -> bool {
    Language.is_valid(input)
}

/// Uppercase runs joined by single underscores, at most 256 chars.
#[must_use]
pub fn is_topic(input: &str) -> bool {
    Topic.is_valid(input)
}

/// ASCII alphanumerics with single interior spaces, at most 256 chars.
#[must_use]
pub fn is_display_name(input: &str) -> bool {
    DisplayName.is_valid(input)
}

/// Letters with single `'`, `,`, `.`, ` ` or `-` separators, at most 256 chars.
#[must_use]
pub fn is_user_display_name(input: &str) -> bool {
    UserDisplayName.is_valid(input)
}

/// 32 lowercase hex digits laid out as a UUID v4 without hyphens.
#[must_use]
pub fn is_uuid4_without_hyphens(input: &str) -> bool {
    CompactUuidV4.is_valid(input)
}

/// `O` followed by 16 digits.
#[must_use]
pub fn is_order_number(input: &str) -> bool {
    OrderNumber.is_valid(input)
}

/// Lowercase image reference with an optional `:tag`, at most 256 chars.
#[must_use]
pub fn is_docker_image(input: &str) -> bool {
    ContainerImage.is_valid(input)
}

/// `local@domain.tld` address, 5 to 254 chars.
#[must_use]
pub fn is_email(input: &str) -> bool {
    Email.is_valid(input)
}

/// Uppercase resource name with `:`-separated segments, at most 256 chars.
#[must_use]
pub fn is_permission_resource(input: &str) -> bool {
    PermissionResource.is_valid(input)
}

/// One or more `/segment` components, at most 256 chars.
#[must_use]
pub fn is_path(input: &str) -> bool {
    Path.is_valid(input)
}

/// URL with a known scheme, at most 2000 chars.
#[must_use]
pub fn is_url(input: &str) -> bool {
    Url.is_valid(input)
}

/// Digits followed by `Mi`, at most 9 chars.
#[must_use]
pub fn is_memory_size(input: &str) -> bool {
    MemorySize.is_valid(input)
}

/// RFC 3339 timestamp.
#[must_use]
pub fn is_time(input: &str) -> bool {
    Timestamp.is_valid(input)
}

/// `true` when the input *contains* a `YYYY-MM-DD` digit run anywhere.
///
/// Unlike every other predicate this one is not anchored; see
/// [`LooseDate`].
#[must_use]
pub fn is_date(input: &str) -> bool {
    LooseDate.is_valid(input)
}

/// Two or three dot-separated base64 segments.
#[must_use]
pub fn is_jwt(input: &str) -> bool {
    JwtShape.is_valid(input)
}

/// Non-empty run of ASCII digits.
#[must_use]
pub fn is_numeric(input: &str) -> bool {
    primitives::is_numeric(input)
}

/// `true` when `input` equals one of `allowed`.
#[must_use]
pub fn is_in<S: AsRef<str>>(input: &str, allowed: &[S]) -> bool {
    primitives::is_member(input, allowed)
}

/// Non-empty and unchanged by lowercasing.
#[must_use]
pub fn is_lowercase(input: &str) -> bool {
    primitives::is_lowercase(input)
}

/// Password strength with the default [`PasswordPolicy`].
#[must_use]
pub fn is_password(input: &str) -> bool {
    PasswordStrength::new().is_valid(input)
}

/// Password strength with a caller-supplied policy.
#[must_use]
pub fn is_password_with(input: &str, policy: PasswordPolicy) -> bool {
    PasswordStrength::with_policy(policy).is_valid(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_examples() {
        assert!(is_alphanumeric("abc-123", None));
        assert!(!is_alphanumeric("abc--123", None));
        assert!(is_alphanumeric("abc_1:23", None));

        assert!(is_tag("machine-learning"));
        assert!(!is_tag(&"a".repeat(31)));

        assert!(is_password("Passw0rd!"));
        assert!(!is_password("password"));
        assert!(!is_password("P4ss!"));

        assert!(is_url("https://example.com/path"));
        assert!(!is_url("javascript:alert(1)"));

        assert!(is_memory_size("512Mi"));
        assert!(!is_memory_size("512MB"));
        assert!(!is_memory_size("12345678Mi"));
    }

    #[test]
    fn test_membership() {
        assert!(is_in("b", &["a", "b"]));
        assert!(!is_in("c", &["a", "b"]));
        assert!(!is_in::<&str>("a", &[]));
    }

    #[test]
    fn test_password_with_policy() {
        let policy = PasswordPolicy::default().length(4, 8);
        assert!(is_password_with("Ab1!", policy));
        assert!(!is_password_with("Ab1!", PasswordPolicy::default()));
    }

    #[test]
    fn test_empty_input_rejected() {
        let predicates: &[fn(&str) -> bool] = &[
            is_tag,
            is_language,
            is_topic,
            is_display_name,
            is_user_display_name,
            is_uuid4_without_hyphens,
            is_order_number,
            is_docker_image,
            is_email,
            is_permission_resource,
            is_path,
            is_url,
            is_memory_size,
            is_time,
            is_date,
            is_jwt,
            is_numeric,
            is_lowercase,
            is_password,
        ];
        for predicate in predicates {
            assert!(!predicate(""));
        }
        assert!(!is_alphanumeric("", None));
        assert!(!is_in("", &["a"]));
    }
}
