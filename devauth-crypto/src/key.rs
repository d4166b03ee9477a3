//! Key material derived from an application identifier.
//!
//! The key is not stretched. Hyphens are removed from the identifier and
//! the remaining UTF-8 bytes are used as the AES-256 key verbatim, so a
//! GUID such as `11111111-2222-3333-4444-555566667777` yields exactly
//! 32 bytes. Existing definition files depend on this mapping.

use crate::error::{CryptoError, CryptoResult};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Size of the container key in bytes (256 bits for AES-256).
pub const KEY_SIZE: usize = 32;

/// Container key with automatic zeroization on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AppKey {
    bytes: [u8; KEY_SIZE],
}

impl AppKey {
    /// Creates a key from raw bytes.
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for AppKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Derives the container key from an application identifier.
///
/// All `-` characters are removed and the rest is taken byte for byte.
/// Fails with [`CryptoError::InvalidKeyLength`] unless exactly
/// [`KEY_SIZE`] bytes remain.
pub fn derive_key(app_id: &str) -> CryptoResult<AppKey> {
    let material: Zeroizing<Vec<u8>> =
        Zeroizing::new(app_id.bytes().filter(|&b| b != b'-').collect());

    if material.len() != KEY_SIZE {
        return Err(CryptoError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: material.len(),
        });
    }

    let mut bytes = [0u8; KEY_SIZE];
    bytes.copy_from_slice(&material);
    Ok(AppKey::from_bytes(bytes))
}
