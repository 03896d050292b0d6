//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValidateExt`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]
//!
//! Every validator in the crate is a stateless value implementing
//! [`Validate`] with `Input = str`. The boolean predicates in
//! [`rules`](crate::rules) are thin folds over these.
//!
//! # Examples
//!
//! ```
//! use inputguard_validator::foundation::validate_with_all;
//! use inputguard_validator::foundation::Validate;
//! use inputguard_validator::validators::{Tag, Topic};
//!
//! let validators: &[&dyn Validate<Input = str>] = &[&Tag, &Topic];
//! let errors = validate_with_all("machine-learning", validators).unwrap_err();
//! assert_eq!(errors.codes(), vec!["invalid_format"]);
//! ```

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors};
pub use traits::{Validate, ValidateExt};

/// Validates a value with multiple validators, collecting every failure.
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let errors: ValidationErrors = validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect();

    if errors.has_errors() {
        Err(errors)
    } else {
        Ok(())
    }
}

/// Validates a value with multiple validators (at least one must pass).
pub fn validate_with_any<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        match validator.validate(value) {
            Ok(()) => return Ok(()),
            Err(e) => errors.add(e),
        }
    }

    Err(errors)
}
