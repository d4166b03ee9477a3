//! Error types for authentication checks.

use thiserror::Error;

/// Result type for authentication checks.
pub type AuthResult<T> = Result<T, AuthError>;

/// Result type for identifier enumeration.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors that abort a check before a decision is made.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Required input is empty or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A file needed by the check could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No device with this name exists in the definition.
    #[error("device not defined: {0}")]
    DeviceNotDefined(String),
}

/// An identifier source could not be enumerated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The resource exists on this platform but could not be read.
    #[error("{resource} unavailable: {reason}")]
    Unavailable {
        resource: &'static str,
        reason: String,
    },

    /// The provider has no way to enumerate this resource here.
    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),
}

impl ProviderError {
    /// Builds a [`ProviderError::Unavailable`] from any displayable cause.
    pub fn unavailable(resource: &'static str, reason: impl std::fmt::Display) -> Self {
        Self::Unavailable {
            resource,
            reason: reason.to_string(),
        }
    }
}
