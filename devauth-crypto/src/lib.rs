//! Container encryption for device authentication definitions.
//!
//! A definition file is an AES-256-CBC ciphertext prefixed with its IV:
//!
//! ```text
//! offset 0   IV (16 bytes, random per encryption)
//! offset 16  ciphertext (PKCS#7 padded, multiple of 16 bytes)
//! ```
//!
//! There is no magic number, version byte or length field. The cipher
//! parameters are fixed, and the key is taken directly from the
//! application identifier (see [`derive_key`]).
//!
//! Every operation is a free function over per-call values. Nothing here
//! holds key or IV state between calls, so concurrent loads and saves
//! cannot interfere with each other.

mod cipher;
mod error;
mod key;

pub use cipher::{decrypt, encrypt, encrypt_with_iv, EncryptedData, BLOCK_SIZE, IV_SIZE};
pub use error::{CryptoError, CryptoResult};
pub use key::{derive_key, AppKey, KEY_SIZE};
