//! Core traits for the validation system
//!
//! This module defines the fundamental traits that all validators implement.

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// Validators are pure: the result depends only on `self` and `input`, and
/// calling `validate` twice on the same input yields the same result.
///
/// # Examples
///
/// ```
/// use inputguard_validator::foundation::{Validate, ValidationError};
///
/// struct NoSpaces;
///
/// impl Validate for NoSpaces {
///     type Input = str;
///
///     fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
///         if input.contains(' ') {
///             Err(ValidationError::new("no_spaces", "must not contain spaces"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NoSpaces.is_valid("abc"));
/// assert!(!NoSpaces.is_valid("a b"));
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the input conforms
    /// * `Err(ValidationError)` describing the first failed check
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Classifies the input, discarding the failure reason.
    #[inline]
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension trait providing combinator methods for validators.
///
/// Automatically implemented for every `Validate` type, so several rules can
/// be checked against the same field at the call site.
///
/// # Examples
///
/// ```
/// use inputguard_validator::prelude::*;
///
/// let handle = tag().or(numeric());
/// assert!(handle.is_valid("machine-learning"));
/// assert!(handle.is_valid("42"));
/// assert!(!handle.is_valid("machine_learning"));
/// ```
pub trait ValidateExt: Validate + Sized {
    /// Combines two validators with logical AND.
    ///
    /// Short-circuits on the first failure.
    fn and<V>(self, other: V) -> And<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        And::new(self, other)
    }

    /// Combines two validators with logical OR.
    ///
    /// Short-circuits on the first success.
    fn or<V>(self, other: V) -> Or<Self, V>
    where
        V: Validate<Input = Self::Input>,
    {
        Or::new(self, other)
    }

    /// Inverts the validator with logical NOT.
    fn not(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<T: Validate> ValidateExt for T {}

pub use crate::combinators::and::And;
pub use crate::combinators::not::Not;
pub use crate::combinators::or::Or;
