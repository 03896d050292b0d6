//! # inputguard-validator
//!
//! Input validation rules for untrusted strings arriving at an API boundary:
//! identifier formats, names, compact UUIDs, container image references,
//! emails, URLs, timestamps, JWT shapes and password strength.
//!
//! ## Quick Start
//!
//! ```
//! use inputguard_validator::rules;
//!
//! assert!(rules::is_tag("machine-learning"));
//! assert!(rules::is_password("Passw0rd!"));
//! assert!(rules::check("alphanumeric", "abc-123", &["7"]));
//! ```
//!
//! ## Layers
//!
//! - [`rules`]: flat `is_*` predicates and the [`Rule`](rules::Rule) registry
//!   for looking rules up by name at runtime.
//! - [`validators`]: one type per format implementing
//!   [`Validate`](foundation::Validate), reporting a structured
//!   [`ValidationError`](foundation::ValidationError) on failure.
//! - [`primitives`]: generic string predicates (numeric, lowercase,
//!   membership, timestamps).
//! - [`combinators`]: `.and()` / `.or()` / `.not()` composition.
//!
//! Every check is pure and synchronous. Compiled patterns are shared
//! process-wide and initialised on first use, so all validators can be
//! called concurrently from any thread.
//!
//! ## Creating Validators
//!
//! Use the [`validator!`] macro for zero-boilerplate validators,
//! or implement [`Validate`](foundation::Validate) manually for complex cases.

// ValidationError is the fundamental error type for all validators; boxing it
// would add indirection to every validation call.
#![allow(clippy::result_large_err)]
// Combinator nesting (And<Or<Not<...>, ...>, ...>) produces complex types.
#![allow(clippy::type_complexity)]

pub mod combinators;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod primitives;
pub mod rules;
pub mod validators;
