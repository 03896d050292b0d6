//! Prelude module for convenient imports.
//!
//! Provides a single `use inputguard_validator::prelude::*;` import that
//! brings in the traits, error types, validators, combinators and the rule
//! registry.
//!
//! # Examples
//!
//! ```
//! use inputguard_validator::prelude::*;
//!
//! let handle = alphanumeric().and(lowercase());
//! assert!(handle.is_valid("build-42"));
//! assert!(!handle.is_valid("Build-42"));
//!
//! let rule: Rule = "order_number".parse().unwrap();
//! assert!(rule.check("O1234567890123456", &[]));
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidateExt, ValidationError, ValidationErrors};

// ============================================================================
// VALIDATORS: All built-in validators
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// COMBINATORS: Composition functions and types
// ============================================================================

pub use crate::combinators::{And, Not, Or, and, not, or};

// ============================================================================
// RULES: Name-addressed registry
// ============================================================================

pub use crate::rules::{Rule, RuleError};
