//! Named wrappers over [`primitives`](crate::primitives).

use crate::foundation::ValidationError;
use crate::primitives::{is_lowercase, is_member, is_numeric};

crate::validator! {
    /// Non-empty string of ASCII digits.
    pub Numeric for str;
    rule(input) { is_numeric(input) }
    error(input) { ValidationError::invalid_format("numeric") }
    fn numeric();
}

crate::validator! {
    /// Non-empty string equal to its own lowercase mapping.
    pub Lowercase for str;
    rule(input) { is_lowercase(input) }
    error(input) { ValidationError::invalid_format("lowercase") }
    fn lowercase();
}

crate::validator! {
    /// Input must equal one of the allowed values (case-sensitive).
    ///
    /// ```
    /// use inputguard_validator::validators::one_of;
    /// use inputguard_validator::foundation::Validate;
    ///
    /// let platform = one_of(["android", "ios", "web"]);
    /// assert!(platform.is_valid("ios"));
    /// assert!(!platform.is_valid("iOS"));
    /// ```
    #[derive(PartialEq, Eq, Hash)]
    pub OneOf { allowed: Vec<String> } for str;
    rule(self, input) { is_member(input, self.allowed.as_slice()) }
    error(self, input) {
        ValidationError::new("not_in_set", "Value is not one of the allowed values")
            .with_param("allowed", self.allowed.join(","))
    }
    new(allowed: impl IntoIterator<Item = impl Into<String>>) {
        Self { allowed: allowed.into_iter().map(Into::into).collect() }
    }
    fn one_of(allowed: impl IntoIterator<Item = impl Into<String>>);
}
