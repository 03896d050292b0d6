//! Email addresses, OWASP validation-regex flavour.

use std::sync::LazyLock;

use regex::Regex;

use crate::validators::format::{Format, LengthBound, compile};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^[a-zA-Z0-9_+&*-]+(?:\.[a-zA-Z0-9_+&*-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,7}$",
    )
});

static EMAIL: Format = Format::new("email", &EMAIL_REGEX, LengthBound::Between(5, 254));

crate::validator! {
    /// Email address with a 2–7 letter TLD, 5 to 254 chars long.
    ///
    /// A permissive superset of RFC 5322 addresses: quoted local parts, IP
    /// literals and internationalised domains are out of scope.
    ///
    /// ```
    /// use inputguard_validator::validators::email;
    /// use inputguard_validator::foundation::Validate;
    ///
    /// assert!(email().is_valid("first.last+tag@mail.example.com"));
    /// assert!(!email().is_valid("first..last@example.com"));
    /// ```
    pub Email for str;
    rule(input) { EMAIL.matches(input) }
    error(input) { EMAIL.explain(input) }
    fn email();
}
