//! Rule registry: rule name → predicate.
//!
//! Rules arrive by name from configuration or request schemas, with their
//! auxiliary parameters as strings. A parameter that cannot be interpreted
//! makes the rule fail rather than raising.

use std::fmt;
use std::str::FromStr;

use crate::foundation::{Validate, ValidationError};
use crate::primitives::is_member;
use crate::validators::{
    AlphanumericIdentifier, CompactUuidV4, ContainerImage, DisplayName, Email, JwtShape, Language,
    Lowercase, LooseDate, MemorySize, Numeric, OneOf, OrderNumber, PasswordStrength, Path,
    PermissionResource, Tag, Timestamp, Topic, Url, UserDisplayName,
};

// ============================================================================
// ERRORS
// ============================================================================

/// Errors raised while resolving a rule or its parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// No rule is registered under this name.
    #[error("unknown validation rule `{0}`")]
    UnknownRule(String),

    /// A rule parameter could not be parsed.
    #[error("invalid parameter `{value}` for rule `{rule}`")]
    InvalidParameter {
        /// Rule the parameter was given to.
        rule: Rule,
        /// The offending parameter text.
        value: String,
    },
}

impl From<RuleError> for ValidationError {
    fn from(error: RuleError) -> Self {
        match error {
            RuleError::UnknownRule(name) => {
                ValidationError::new("unknown_rule", "Unknown validation rule")
                    .with_param("rule", name)
            }
            RuleError::InvalidParameter { rule, value } => {
                ValidationError::invalid_parameter(rule.name(), value)
            }
        }
    }
}

// ============================================================================
// RULE
// ============================================================================

/// Every named validation rule.
///
/// The canonical name (see [`Rule::name`]) is what [`FromStr`], [`fmt::Display`]
/// and serde use.
///
/// ```
/// use inputguard_validator::rules::Rule;
///
/// let rule: Rule = "alphanumeric".parse().unwrap();
/// assert!(rule.check("abc-123", &["7"]));
/// assert!(!rule.check("abc-123", &["6"]));
/// assert!(!rule.check("abc-123", &["seven"]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rule {
    /// Optional parameter: maximum length in chars.
    Alphanumeric,
    /// Hyphenated letters, at most 30 chars.
    Tag,
    /// Hyphenated letters, at most 256 chars.
    Language,
    /// Uppercase words joined by underscores.
    Topic,
    /// Alphanumerics with single spaces.
    DisplayName,
    /// Letters with name punctuation.
    UserDisplayName,
    /// Compact lowercase UUID v4.
    #[cfg_attr(feature = "serde", serde(rename = "uuid4_without_hyphens"))]
    Uuid4WithoutHyphens,
    /// `O` plus 16 digits.
    OrderNumber,
    /// Container image reference.
    DockerImage,
    /// Email address.
    Email,
    /// `RESOURCE:segment` permission target.
    PermissionResource,
    /// Absolute slash-separated path.
    Path,
    /// URL with a known scheme.
    Url,
    /// Digits followed by `Mi`.
    MemorySize,
    /// RFC 3339 timestamp.
    Time,
    /// Unanchored: passes when a `YYYY-MM-DD` run appears anywhere.
    Date,
    /// Two or three base64 segments.
    Jwt,
    /// ASCII digits only.
    Numeric,
    /// Parameters: the allowed values.
    In,
    /// Unchanged by lowercasing.
    Lowercase,
    /// Password strength under the default policy.
    Password,
}

impl Rule {
    /// All rules, in declaration order.
    pub const ALL: [Rule; 21] = [
        Rule::Alphanumeric,
        Rule::Tag,
        Rule::Language,
        Rule::Topic,
        Rule::DisplayName,
        Rule::UserDisplayName,
        Rule::Uuid4WithoutHyphens,
        Rule::OrderNumber,
        Rule::DockerImage,
        Rule::Email,
        Rule::PermissionResource,
        Rule::Path,
        Rule::Url,
        Rule::MemorySize,
        Rule::Time,
        Rule::Date,
        Rule::Jwt,
        Rule::Numeric,
        Rule::In,
        Rule::Lowercase,
        Rule::Password,
    ];

    /// Canonical snake_case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Rule::Alphanumeric => "alphanumeric",
            Rule::Tag => "tag",
            Rule::Language => "language",
            Rule::Topic => "topic",
            Rule::DisplayName => "display_name",
            Rule::UserDisplayName => "user_display_name",
            Rule::Uuid4WithoutHyphens => "uuid4_without_hyphens",
            Rule::OrderNumber => "order_number",
            Rule::DockerImage => "docker_image",
            Rule::Email => "email",
            Rule::PermissionResource => "permission_resource",
            Rule::Path => "path",
            Rule::Url => "url",
            Rule::MemorySize => "memory_size",
            Rule::Time => "time",
            Rule::Date => "date",
            Rule::Jwt => "jwt",
            Rule::Numeric => "numeric",
            Rule::In => "in",
            Rule::Lowercase => "lowercase",
            Rule::Password => "password",
        }
    }

    /// Validates `input`, reporting why it does not conform.
    ///
    /// Parameters are ignored by rules that take none.
    pub fn validate(self, input: &str, params: &[&str]) -> Result<(), ValidationError> {
        match self {
            Rule::Alphanumeric => AlphanumericIdentifier {
                max_length: self.max_length_param(params)?,
            }
            .validate(input),
            Rule::Tag => Tag.validate(input),
            Rule::Language => Language.validate(input),
            Rule::Topic => Topic.validate(input),
            Rule::DisplayName => DisplayName.validate(input),
            Rule::UserDisplayName => UserDisplayName.validate(input),
            Rule::Uuid4WithoutHyphens => CompactUuidV4.validate(input),
            Rule::OrderNumber => OrderNumber.validate(input),
            Rule::DockerImage => ContainerImage.validate(input),
            Rule::Email => Email.validate(input),
            Rule::PermissionResource => PermissionResource.validate(input),
            Rule::Path => Path.validate(input),
            Rule::Url => Url.validate(input),
            Rule::MemorySize => MemorySize.validate(input),
            Rule::Time => Timestamp.validate(input),
            Rule::Date => LooseDate.validate(input),
            Rule::Jwt => JwtShape.validate(input),
            Rule::Numeric => Numeric.validate(input),
            Rule::In if is_member(input, params) => Ok(()),
            Rule::In => OneOf::new(params.iter().copied()).validate(input),
            Rule::Lowercase => Lowercase.validate(input),
            Rule::Password => PasswordStrength::new().validate(input),
        }
    }

    /// Classifies `input`, surfacing parameters that cannot be interpreted.
    ///
    /// ```
    /// use inputguard_validator::rules::{Rule, RuleError};
    ///
    /// assert_eq!(Rule::Alphanumeric.try_check("abc", &["3"]), Ok(true));
    /// assert!(matches!(
    ///     Rule::Alphanumeric.try_check("abc", &["three"]),
    ///     Err(RuleError::InvalidParameter { .. })
    /// ));
    /// ```
    pub fn try_check(self, input: &str, params: &[&str]) -> Result<bool, RuleError> {
        if self == Rule::Alphanumeric {
            let max_length = self.max_length_param(params)?;
            return Ok(AlphanumericIdentifier { max_length }.is_valid(input));
        }
        Ok(self.validate(input, params).is_ok())
    }

    /// Classifies `input`. Every failure, including a bad parameter, is `false`.
    #[must_use]
    pub fn check(self, input: &str, params: &[&str]) -> bool {
        let valid = self.try_check(input, params).unwrap_or_else(|error| {
            tracing::debug!(%error, "rule parameter rejected");
            false
        });
        tracing::trace!(rule = self.name(), valid, "rule evaluated");
        valid
    }

    /// Reads the optional length bound from the first parameter.
    fn max_length_param(self, params: &[&str]) -> Result<Option<usize>, RuleError> {
        params
            .first()
            .map(|raw| {
                raw.parse::<usize>().map_err(|_| RuleError::InvalidParameter {
                    rule: self,
                    value: (*raw).to_string(),
                })
            })
            .transpose()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rule::ALL
            .into_iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| RuleError::UnknownRule(s.to_string()))
    }
}

/// Looks up a rule by name and evaluates it.
///
/// Unknown rule names classify every input as invalid.
///
/// ```
/// use inputguard_validator::rules::check;
///
/// assert!(check("memory_size", "512Mi", &[]));
/// assert!(check("in", "ios", &["android", "ios"]));
/// assert!(!check("no_such_rule", "anything", &[]));
/// ```
#[must_use]
pub fn check(rule: &str, input: &str, params: &[&str]) -> bool {
    match rule.parse::<Rule>() {
        Ok(rule) => rule.check(input, params),
        Err(error) => {
            tracing::debug!(%error, "rejecting input for unknown rule");
            false
        }
    }
}
