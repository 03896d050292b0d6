//! NOT combinator - inverts a validator

use crate::foundation::{Validate, ValidationError};

/// Inverts a validator with logical NOT.
///
/// # Examples
///
/// ```
/// use inputguard_validator::combinators::Not;
/// use inputguard_validator::foundation::Validate;
/// use inputguard_validator::validators::Numeric;
///
/// // Display names that are not purely numeric
/// let validator = Not::new(Numeric);
/// assert!(validator.is_valid("player1"));
/// assert!(!validator.is_valid("12345"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<V> {
    pub(crate) inner: V,
}

impl<V> Not<V> {
    /// Creates a new `Not` combinator.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Extracts the inner validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V> Validate for Not<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        match self.inner.validate(input) {
            Ok(()) => Err(ValidationError::new(
                "not_failed",
                "Validation should have failed but passed",
            )),
            Err(_) => Ok(()),
        }
    }
}

/// Creates a `Not` combinator from a validator.
pub fn not<V>(validator: V) -> Not<V> {
    Not::new(validator)
}
