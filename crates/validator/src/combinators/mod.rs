//! Logical combinators for composing validators at the call site.
//!
//! Rules are independent; these only exist so a caller can check a single
//! field against several of them with one value.

pub mod and;
pub mod not;
pub mod or;

pub use and::{And, and};
pub use not::{Not, not};
pub use or::{Or, or};
