//! Human-facing names.

use std::sync::LazyLock;

use regex::Regex;

use crate::validators::format::{Format, LengthBound, compile};

// Spaces are optional between runs, so repeated and trailing spaces pass.
static DISPLAY_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[a-zA-Z0-9]+(([a-zA-Z0-9 ])?[a-zA-Z0-9]*)*$"));

static USER_DISPLAY_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[a-zA-Z]+(([',. -][a-zA-Z ])?[a-zA-Z]*)*$"));

static DISPLAY_NAME: Format = Format::new(
    "display_name",
    &DISPLAY_NAME_REGEX,
    LengthBound::AtMost(256),
);
static USER_DISPLAY_NAME: Format = Format::new(
    "user_display_name",
    &USER_DISPLAY_NAME_REGEX,
    LengthBound::AtMost(256),
);

crate::validator! {
    /// Alphanumeric display name, words optionally separated by spaces.
    ///
    /// ```
    /// use inputguard_validator::validators::display_name;
    /// use inputguard_validator::foundation::Validate;
    ///
    /// assert!(display_name().is_valid("Player One 2"));
    /// assert!(!display_name().is_valid("Player_One"));
    /// ```
    pub DisplayName for str;
    rule(input) { DISPLAY_NAME.matches(input) }
    error(input) { DISPLAY_NAME.explain(input) }
    fn display_name();
}

crate::validator! {
    /// A person's name: letters, with `'`, `,`, `.`, `-` or space between
    /// letter runs.
    pub UserDisplayName for str;
    rule(input) { USER_DISPLAY_NAME.matches(input) }
    error(input) { USER_DISPLAY_NAME.explain(input) }
    fn user_display_name();
}
