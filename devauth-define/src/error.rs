//! Error types for definition loading and saving.

use devauth_crypto::CryptoError;
use thiserror::Error;

/// Result type for definition operations.
pub type DefineResult<T> = Result<T, DefineError>;

/// Errors that can occur while reading or writing a definition.
#[derive(Debug, Error)]
pub enum DefineError {
    /// Source or destination could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Application identifier does not yield a key of the required length.
    #[error("invalid application identifier: expected {expected} key bytes, got {actual}")]
    InvalidKey { expected: usize, actual: usize },

    /// Decrypted payload is not a definition of a supported version.
    #[error("invalid definition format: {0}")]
    Format(String),

    /// Container could not be decrypted or decoded.
    ///
    /// Deliberately carries no detail: a wrong identifier, a corrupted
    /// file and a non-container must look the same to the caller.
    #[error("device authentication definition is unreadable")]
    Unreadable,

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<CryptoError> for DefineError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::InvalidKeyLength { expected, actual } => {
                Self::InvalidKey { expected, actual }
            }
            CryptoError::InvalidContainerLength { .. } | CryptoError::Decryption(_) => {
                Self::Unreadable
            }
        }
    }
}
