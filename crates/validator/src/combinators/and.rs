//! AND combinator - both validators must pass
//!
//! # Examples
//!
//! ```
//! use inputguard_validator::combinators::And;
//! use inputguard_validator::foundation::Validate;
//! use inputguard_validator::validators::{Lowercase, Tag};
//!
//! let validator = And::new(Tag, Lowercase);
//! assert!(validator.is_valid("machine-learning"));
//! assert!(!validator.is_valid("Machine-Learning"));
//! ```

use crate::foundation::{Validate, ValidationError};

/// Combines two validators with logical AND.
///
/// Errors are returned from the first failing validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<L, R> {
    pub(crate) left: L,
    pub(crate) right: R,
}

impl<L, R> And<L, R> {
    /// Creates a new `And` combinator.
    pub fn new(left: L, right: R) -> Self {
        Self { left, right }
    }

    /// Extracts the left and right validators.
    pub fn into_parts(self) -> (L, R) {
        (self.left, self.right)
    }
}

impl<L, R> Validate for And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    type Input = L::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.left.validate(input)?;
        self.right.validate(input)
    }
}

/// Creates an `And` combinator from two validators.
pub fn and<L, R>(left: L, right: R) -> And<L, R>
where
    L: Validate,
    R: Validate<Input = L::Input>,
{
    And::new(left, right)
}
