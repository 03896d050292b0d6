//! Password strength scoring.
//!
//! A password is acceptable when its length is within the policy bounds and
//! it draws on enough of four character classes:
//!
//! | Class     | Unicode categories |
//! |-----------|--------------------|
//! | uppercase | `Lu`               |
//! | lowercase | `Ll`               |
//! | numeric   | `N*`               |
//! | special   | `P*`, `S*`         |
//!
//! Length is mandatory; the classes are scored. With the default policy a
//! password needs 8..=32 bytes and any three of the four classes.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::{Validate, ValidationError};
use crate::validators::format::compile;

static UPPERCASE_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(r"\p{Lu}"));
static LOWERCASE_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(r"\p{Ll}"));
static NUMERIC_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(r"\p{N}"));
static SPECIAL_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(r"[\p{P}\p{S}]"));

/// Number of scored character classes.
pub const CHARACTER_CLASS_COUNT: usize = 4;

// ============================================================================
// POLICY
// ============================================================================

/// Password acceptance policy.
///
/// Lengths are counted in UTF-8 bytes. `required_classes` above
/// [`CHARACTER_CLASS_COUNT`] is treated as "all classes".
///
/// With the `serde` feature the policy can be read from configuration;
/// missing fields fall back to the defaults.
///
/// ```
/// use inputguard_validator::validators::PasswordPolicy;
///
/// let policy = PasswordPolicy::default();
/// assert_eq!(policy.min_length, 8);
/// assert_eq!(policy.max_length, 32);
/// assert_eq!(policy.required_classes, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PasswordPolicy {
    /// Minimum length in bytes (inclusive).
    pub min_length: usize,
    /// Maximum length in bytes (inclusive).
    pub max_length: usize,
    /// How many of the four character classes must be present.
    pub required_classes: usize,
}

impl PasswordPolicy {
    /// The default policy: 8..=32 bytes, three of four classes.
    pub const DEFAULT: Self = Self {
        min_length: 8,
        max_length: 32,
        required_classes: 3,
    };

    /// Sets the length bounds.
    #[must_use = "builder methods must be chained or built"]
    pub fn length(mut self, min: usize, max: usize) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Sets the number of character classes required.
    #[must_use = "builder methods must be chained or built"]
    pub fn required_classes(mut self, count: usize) -> Self {
        self.required_classes = count;
        self
    }

    fn effective_required_classes(&self) -> usize {
        self.required_classes.min(CHARACTER_CLASS_COUNT)
    }

    fn admits_length(&self, len: usize) -> bool {
        (self.min_length..=self.max_length).contains(&len)
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// ============================================================================
// CHARACTER CLASSES
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct CharacterClasses {
    pub(crate) uppercase: bool,
    pub(crate) lowercase: bool,
    pub(crate) numeric: bool,
    pub(crate) special: bool,
}

impl CharacterClasses {
    pub(crate) fn scan(input: &str) -> Self {
        Self {
            uppercase: UPPERCASE_REGEX.is_match(input),
            lowercase: LOWERCASE_REGEX.is_match(input),
            numeric: NUMERIC_REGEX.is_match(input),
            special: SPECIAL_REGEX.is_match(input),
        }
    }

    pub(crate) fn count(self) -> usize {
        [self.uppercase, self.lowercase, self.numeric, self.special]
            .into_iter()
            .filter(|present| *present)
            .count()
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Scores a password against a [`PasswordPolicy`].
///
/// ```
/// use inputguard_validator::validators::password;
/// use inputguard_validator::foundation::Validate;
///
/// assert!(password().is_valid("Passw0rd!"));
/// assert!(!password().is_valid("password"));
/// assert!(!password().is_valid("P4ss!"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PasswordStrength {
    policy: PasswordPolicy,
}

impl PasswordStrength {
    /// Validator with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(PasswordPolicy::DEFAULT)
    }

    /// Validator with a custom policy.
    #[must_use]
    pub fn with_policy(policy: PasswordPolicy) -> Self {
        Self { policy }
    }

    /// Returns the policy in force.
    #[must_use]
    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }
}

impl Validate for PasswordStrength {
    type Input = str;

    fn validate(&self, input: &str) -> Result<(), ValidationError> {
        let len = input.len();
        if !self.policy.admits_length(len) {
            return Err(ValidationError::new(
                "password_length",
                format!(
                    "Password must be between {} and {} characters",
                    self.policy.min_length, self.policy.max_length
                ),
            )
            .with_param("min", self.policy.min_length.to_string())
            .with_param("max", self.policy.max_length.to_string())
            .with_param("actual", len.to_string()));
        }

        let required = self.policy.effective_required_classes();
        let satisfied = CharacterClasses::scan(input).count();
        if satisfied < required {
            return Err(ValidationError::new(
                "password_too_weak",
                format!(
                    "Password must mix at least {required} of: uppercase, lowercase, digits, symbols"
                ),
            )
            .with_param("required", required.to_string())
            .with_param("satisfied", satisfied.to_string()));
        }

        Ok(())
    }
}

/// Creates a password validator with the default policy.
#[must_use]
pub fn password() -> PasswordStrength {
    PasswordStrength::new()
}
