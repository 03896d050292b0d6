//! Memory quantities in mebibytes.

use std::sync::LazyLock;

use regex::Regex;

use crate::validators::format::{Format, LengthBound, compile};

static MEMORY_SIZE_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(r"^[0-9]+Mi$"));

static MEMORY_SIZE: Format = Format::new(
    "memory_size",
    &MEMORY_SIZE_REGEX,
    LengthBound::AtMost(9),
);

crate::validator! {
    /// Digits followed by `Mi`, at most 9 chars in total (so up to 7 digits).
    pub MemorySize for str;
    rule(input) { MEMORY_SIZE.matches(input) }
    error(input) { MEMORY_SIZE.explain(input) }
    fn memory_size();
}
