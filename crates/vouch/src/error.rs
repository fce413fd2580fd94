use core::fmt;

use thiserror::Error;

use crate::Failure;

/// Error raised when parsing a textual option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The option is not recognized.
    #[error("unsupported option `{option}`")]
    UnsupportedOption {
        /// The unsupported option.
        option: String,
    },
    /// The option is recognized but its value is not valid.
    #[error("invalid value `{value}` for option `{option}`")]
    InvalidValue {
        /// The option being configured.
        option: String,
        /// The rejected value.
        value: String,
    },
}

/// Error raised when values cannot be compared structurally, typically
/// because they fail to serialize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CompareError {
    message: String,
}

impl serde::ser::Error for CompareError {
    fn custom<T>(message: T) -> Self
    where
        T: fmt::Display,
    {
        Self {
            message: message.to_string(),
        }
    }
}

/// Error produced by [`Report::into_result`] for a unit that failed.
///
/// [`Report::into_result`]: crate::Report::into_result
#[derive(Debug, Clone, Error)]
#[error("test `{name}` failed with {} failure(s)", failures.len())]
pub struct TestFailed {
    /// The name of the unit.
    pub name: String,
    /// Every failure recorded while the unit ran.
    pub failures: Vec<Failure>,
}
