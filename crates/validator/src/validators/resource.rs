//! Permission resource paths and filesystem-style paths.

use std::sync::LazyLock;

use regex::Regex;

use crate::validators::format::{Format, LengthBound, compile};

static PERMISSION_RESOURCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^[A-Z]+(:([A-Z]+|(\{[a-zA-Z]+\})|[a-zA-Z0-9]+|\*))*$")
});

static PATH_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(r"^(/[a-zA-Z0-9]+)+$"));

static PERMISSION_RESOURCE: Format = Format::new(
    "permission_resource",
    &PERMISSION_RESOURCE_REGEX,
    LengthBound::AtMost(256),
);
static PATH: Format = Format::new("path", &PATH_REGEX, LengthBound::AtMost(256));

crate::validator! {
    /// Colon-separated permission resource, e.g. `NAMESPACE:{namespace}:USER:*`.
    ///
    /// The first segment is uppercase. Later segments may be uppercase words,
    /// a `{placeholder}`, a mixed-case alphanumeric token or `*`.
    ///
    /// ```
    /// use inputguard_validator::validators::permission_resource;
    /// use inputguard_validator::foundation::Validate;
    ///
    /// assert!(permission_resource().is_valid("ADMIN:NAMESPACE:{namespace}:USER:*"));
    /// assert!(!permission_resource().is_valid("admin:NAMESPACE"));
    /// ```
    pub PermissionResource for str;
    rule(input) { PERMISSION_RESOURCE.matches(input) }
    error(input) { PERMISSION_RESOURCE.explain(input) }
    fn permission_resource();
}

crate::validator! {
    /// Absolute path of one or more `/segment` groups, segments alphanumeric.
    pub Path for str;
    rule(input) { PATH.matches(input) }
    error(input) { PATH.explain(input) }
    fn path();
}
