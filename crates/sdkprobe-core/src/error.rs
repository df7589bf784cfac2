//! Error types for the core domain.

use thiserror::Error;

/// Errors raised when a caller escalates a probe outcome.
///
/// Probing itself never fails; this type only exists so that callers who
/// treat a missing SDK as fatal can use `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    /// The SDK-home variable was absent or empty.
    #[error("{0}")]
    SdkNotFound(String),
}

/// Errors that can occur during settings validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("SDK name must not be empty")]
    EmptySdkName,

    #[error("SDK home variable name must not be empty")]
    EmptyHomeVar,

    #[error("Invalid environment variable name '{0}': must not contain '=' or NUL")]
    InvalidHomeVar(String),

    #[error("Library name at position {0} is empty")]
    EmptyLibraryName(usize),

    #[error("Layout sub-directory '{0}' has an empty path component")]
    EmptySubdir(String),

    #[error("Layout sub-directory '{0}' must be relative")]
    AbsoluteSubdir(String),
}
