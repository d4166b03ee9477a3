//! Container encryption using AES-256-CBC with PKCS#7 padding.
//!
//! CBC with padding is unauthenticated. Tampering is only caught when it
//! breaks the padding here or the payload structure one layer up.

use crate::error::{CryptoError, CryptoResult};
use crate::key::AppKey;
use aes::Aes256;
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::RngCore;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Size of the initialization vector in bytes.
pub const IV_SIZE: usize = 16;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Encrypted data with the IV needed for decryption.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncryptedData {
    /// The IV used for encryption (random per encryption, not secret).
    pub iv: [u8; IV_SIZE],
    /// The padded ciphertext.
    pub ciphertext: Vec<u8>,
}

impl EncryptedData {
    /// Returns the total size of the container.
    pub fn len(&self) -> usize {
        IV_SIZE + self.ciphertext.len()
    }

    /// Returns true if the ciphertext is empty.
    pub fn is_empty(&self) -> bool {
        self.ciphertext.is_empty()
    }

    /// Serializes to the container layout `IV || ciphertext`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len());
        bytes.extend_from_slice(&self.iv);
        bytes.extend_from_slice(&self.ciphertext);
        bytes
    }

    /// Splits a container into IV and ciphertext.
    ///
    /// Only the minimum length is checked here; block alignment and
    /// padding are checked by [`decrypt`].
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() < IV_SIZE + BLOCK_SIZE {
            return Err(CryptoError::InvalidContainerLength {
                expected: IV_SIZE + BLOCK_SIZE,
                actual: bytes.len(),
            });
        }

        let mut iv = [0u8; IV_SIZE];
        iv.copy_from_slice(&bytes[..IV_SIZE]);
        let ciphertext = bytes[IV_SIZE..].to_vec();

        Ok(Self { iv, ciphertext })
    }
}

/// Encrypts plaintext under a freshly generated random IV.
pub fn encrypt(key: &AppKey, plaintext: &[u8]) -> EncryptedData {
    let mut iv = [0u8; IV_SIZE];
    rand::rngs::OsRng.fill_bytes(&mut iv);
    encrypt_with_iv(key, iv, plaintext)
}

/// Encrypts plaintext under a caller-chosen IV.
///
/// Reusing an IV with the same key leaks equality of leading blocks.
/// Use [`encrypt`] unless the IV is already known to be fresh.
pub fn encrypt_with_iv(key: &AppKey, iv: [u8; IV_SIZE], plaintext: &[u8]) -> EncryptedData {
    let ciphertext = Aes256CbcEnc::new(key.as_bytes().into(), (&iv).into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    EncryptedData { iv, ciphertext }
}

/// Decrypts a container, returning the unpadded plaintext.
pub fn decrypt(key: &AppKey, encrypted: &EncryptedData) -> CryptoResult<Vec<u8>> {
    if encrypted.ciphertext.is_empty() || encrypted.ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CryptoError::Decryption(format!(
            "ciphertext length {} is not a positive multiple of {}",
            encrypted.ciphertext.len(),
            BLOCK_SIZE
        )));
    }

    Aes256CbcDec::new(key.as_bytes().into(), (&encrypted.iv).into())
        .decrypt_padded_vec_mut::<Pkcs7>(&encrypted.ciphertext)
        .map_err(|_| {
            CryptoError::Decryption("invalid padding (wrong key or tampered data)".to_string())
        })
}
