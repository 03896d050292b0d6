//! OR combinator - at least one validator must pass
//!
//! # Examples
//!
//! ```
//! use inputguard_validator::combinators::Or;
//! use inputguard_validator::foundation::Validate;
//! use inputguard_validator::validators::{Email, Path};
//!
//! let validator = Or::new(Email, Path);
//! assert!(validator.is_valid("admin@example.com"));
//! assert!(validator.is_valid("/var/log"));
//! assert!(!validator.is_valid("neither"));
//! ```

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical OR.
///
/// If the first validator passes, the second is not evaluated. If both fail,
/// the combined error lists the codes of both alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> Or<L, R> {
    /// Creates a new `Or` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        let Err(left_error) = self.left.validate(input) else {
            return Ok(());
        };
        let Err(right_error) = self.right.validate(input) else {
            return Ok(());
        };

        Err(ValidationError::new("or_failed", "All alternatives failed")
            .with_param("left", left_error.code)
            .with_param("right", right_error.code))
    }
}

/// Creates an `Or` combinator from two validators.
pub fn or<L, R>(left: L, right: R) -> Or<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    Or::new(left, right)
}
