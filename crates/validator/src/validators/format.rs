//! Shared machinery for pattern-based format validators.
//!
//! A [`Format`] pairs a compiled pattern with a [`LengthBound`]. Both checks
//! are independent and both must pass: the pattern is tried first, then the
//! length of the input in Unicode scalar values is compared with the bound.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

/// Compiles one of the crate's built-in patterns.
///
/// The patterns are string literals owned by this crate, so a compile failure
/// is a programming error caught by the crate's tests.
pub(crate) fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

// ============================================================================
// LENGTH BOUND
// ============================================================================

/// Length constraint applied after the pattern matched, counted in chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthBound {
    /// No limit.
    Unbounded,
    /// `len <= max`.
    AtMost(usize),
    /// `len == n`.
    Exactly(usize),
    /// `min <= len <= max`.
    Between(usize, usize),
}

impl LengthBound {
    /// Returns `true` when `len` satisfies the bound.
    #[must_use]
    pub fn admits(self, len: usize) -> bool {
        match self {
            Self::Unbounded => true,
            Self::AtMost(max) => len <= max,
            Self::Exactly(n) => len == n,
            Self::Between(min, max) => (min..=max).contains(&len),
        }
    }

    /// Checks `len`, producing a length error attributed to `rule` on failure.
    pub fn check(self, rule: &'static str, len: usize) -> Result<(), ValidationError> {
        if self.admits(len) {
            return Ok(());
        }
        Err(match self {
            Self::Exactly(n) => ValidationError::exact_length(rule, n, len),
            Self::Between(min, _) if len < min => ValidationError::min_length(rule, min, len),
            Self::AtMost(max) | Self::Between(_, max) => {
                ValidationError::max_length(rule, max, len)
            }
            Self::Unbounded => unreachable!("unbounded admits every length"),
        })
    }
}

// ============================================================================
// FORMAT
// ============================================================================

/// A named shape: compiled pattern plus length bound.
#[derive(Debug)]
pub(crate) struct Format {
    pub(crate) name: &'static str,
    pub(crate) pattern: &'static LazyLock<Regex>,
    pub(crate) length: LengthBound,
}

impl Format {
    pub(crate) const fn new(
        name: &'static str,
        pattern: &'static LazyLock<Regex>,
        length: LengthBound,
    ) -> Self {
        Self {
            name,
            pattern,
            length,
        }
    }

    /// Runs both checks, reporting the first one that fails.
    pub(crate) fn check(&self, input: &str) -> Result<(), ValidationError> {
        if !self.pattern.is_match(input) {
            return Err(ValidationError::invalid_format(self.name));
        }
        self.length.check(self.name, input.chars().count())
    }

    pub(crate) fn matches(&self, input: &str) -> bool {
        self.check(input).is_ok()
    }

    /// Error for an input already known not to match.
    pub(crate) fn explain(&self, input: &str) -> ValidationError {
        self.check(input)
            .err()
            .unwrap_or_else(|| ValidationError::invalid_format(self.name))
    }
}
