//! Error types for the container cipher.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in cryptographic operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key material has the wrong length after hyphens are stripped.
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// Container is too short to hold an IV and one cipher block.
    #[error("invalid container length: need at least {expected} bytes, got {actual}")]
    InvalidContainerLength { expected: usize, actual: usize },

    /// Decryption failed (wrong key, tampered data or bad padding).
    #[error("decryption failed: {0}")]
    Decryption(String),
}
