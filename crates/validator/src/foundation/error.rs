//! Error types for validation failures
//!
//! Validators in this crate classify input; they never fail in the
//! exceptional sense. A [`ValidationError`] only describes *why* a string
//! was classified as non-conforming, so callers that need more than a
//! boolean can surface it to users.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// # Examples
///
/// ```
/// use inputguard_validator::foundation::ValidationError;
///
/// let error = ValidationError::max_length("tag", 30, 31);
/// assert_eq!(error.code, "max_length");
/// assert_eq!(error.param("max"), Some("30"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling and i18n.
    ///
    /// Examples: "invalid_format", "max_length", "password_too_weak"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Optional field name the error is attached to.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value parameters for message templating.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Renders the error as a JSON object for API responses.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates an "invalid_format" error naming the expected format.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        Self::new("invalid_format", format!("Input is not a valid {expected}"))
            .with_param("expected", expected)
    }

    /// Creates a "min_length" error.
    pub fn min_length(field: impl Into<Cow<'static, str>>, min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_field(field)
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(field: impl Into<Cow<'static, str>>, max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters"))
            .with_field(field)
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "exact_length" error.
    pub fn exact_length(field: impl Into<Cow<'static, str>>, expected: usize, actual: usize) -> Self {
        Self::new(
            "exact_length",
            format!("Must be exactly {expected} characters"),
        )
        .with_field(field)
        .with_param("expected", expected.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_parameter" error for a rule argument that could
    /// not be interpreted.
    pub fn invalid_parameter(
        rule: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("invalid_parameter", "Rule parameter could not be parsed")
            .with_field(rule)
            .with_param("value", value)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of validation errors, used when several rules are checked
/// against the same field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the error codes in insertion order.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.code.as_ref()).collect()
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_names_expected() {
        let error = ValidationError::invalid_format("tag");
        assert_eq!(error.code, "invalid_format");
        assert_eq!(error.param("expected"), Some("tag"));
        assert_eq!(error.message, "Input is not a valid tag");
    }

    #[test]
    fn test_length_errors_carry_params() {
        let error = ValidationError::max_length("memory_size", 9, 10);
        assert_eq!(error.field.as_deref(), Some("memory_size"));
        assert_eq!(error.param("max"), Some("9"));
        assert_eq!(error.param("actual"), Some("10"));

        let error = ValidationError::exact_length("order_number", 17, 16);
        assert_eq!(error.param("expected"), Some("17"));
    }

    #[test]
    fn test_display() {
        let error = ValidationError::new("min_length", "too short").with_param("min", "5");
        assert_eq!(error.to_string(), "min_length: too short (min=5)");

        let error = error.with_field("email");
        assert_eq!(error.to_string(), "[email] min_length: too short (min=5)");
    }

    #[test]
    fn test_static_strings_do_not_allocate() {
        let error = ValidationError::new("required", "This field is required");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_error_collection() {
        let errors: ValidationErrors = [
            ValidationError::invalid_format("tag"),
            ValidationError::max_length("tag", 30, 40),
        ]
        .into_iter()
        .collect();

        assert_eq!(errors.len(), 2);
        assert!(errors.has_errors());
        assert_eq!(errors.codes(), vec!["invalid_format", "max_length"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_to_json_value() {
        let json = ValidationError::invalid_parameter("alphanumeric", "ten").to_json_value();
        assert_eq!(json["code"], "invalid_parameter");
        assert_eq!(json["field"], "alphanumeric");
        assert_eq!(json["params"]["value"], "ten");
    }
}
