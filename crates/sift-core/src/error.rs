use std::fmt;
use thiserror::Error as ThisError;

///
/// Error
///
/// Structured construction-time error with a stable classification.
///
/// Query evaluation and ordering never produce this type; it only surfaces at
/// the boundaries where callers build values, patterns, attribute tags, or
/// configuration.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct Error {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
        }
    }

    /// Construct a value-origin error for a rejected scalar payload.
    pub(crate) fn invalid_value(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::InvalidValue, ErrorOrigin::Value, message)
    }

    /// Construct a predicate-origin error for pattern text that failed to compile.
    pub(crate) fn invalid_pattern(source: &str, err: &regex::Error) -> Self {
        Self::new(
            ErrorClass::InvalidPattern,
            ErrorOrigin::Predicate,
            format!("invalid pattern '{source}': {err}"),
        )
    }

    /// Construct a model-origin error for an attribute name with no tag.
    pub(crate) fn unknown_attribute(name: &str) -> Self {
        Self::new(
            ErrorClass::UnknownAttribute,
            ErrorOrigin::Model,
            format!("unknown attribute: '{name}'"),
        )
    }

    /// Construct a config-origin error.
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::InvalidConfig, ErrorOrigin::Config, message)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    InvalidValue,
    InvalidPattern,
    UnknownAttribute,
    InvalidConfig,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::InvalidValue => "invalid_value",
            Self::InvalidPattern => "invalid_pattern",
            Self::UnknownAttribute => "unknown_attribute",
            Self::InvalidConfig => "invalid_config",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Value,
    Predicate,
    Model,
    Config,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Value => "value",
            Self::Predicate => "predicate",
            Self::Model => "model",
            Self::Config => "config",
        };
        write!(f, "{label}")
    }
}

///
/// TESTS
///
