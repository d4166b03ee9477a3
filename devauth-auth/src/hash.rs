//! File digests for hash-based authentication.

use crate::error::{AuthError, AuthResult};
use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use std::fmt;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use std::str::FromStr;

/// Digest algorithm for [`file_hash_matches`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// All supported algorithms.
    pub const ALL: [HashAlgorithm; 5] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
    ];

    /// Canonical lower-case name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
        }
    }

    /// Digest length in bytes.
    #[must_use]
    pub fn output_size(&self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = AuthError;

    /// Accepts `md5`, `sha1`, `sha256`, `sha384`, `sha512`, case-insensitive,
    /// with or without a hyphen (`SHA-256`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase().replace('-', "");
        Self::ALL
            .into_iter()
            .find(|alg| alg.name() == normalized)
            .ok_or_else(|| AuthError::InvalidArgument(format!("unknown hash algorithm: {s:?}")))
    }
}

/// Digests a stream, returning lower-case hex without separators.
pub fn digest_reader<R: Read>(reader: R, algorithm: HashAlgorithm) -> io::Result<String> {
    let bytes = match algorithm {
        HashAlgorithm::Md5 => digest_with::<Md5, _>(reader)?,
        HashAlgorithm::Sha1 => digest_with::<Sha1, _>(reader)?,
        HashAlgorithm::Sha256 => digest_with::<Sha256, _>(reader)?,
        HashAlgorithm::Sha384 => digest_with::<Sha384, _>(reader)?,
        HashAlgorithm::Sha512 => digest_with::<Sha512, _>(reader)?,
    };
    Ok(hex::encode(bytes))
}

/// Digests a whole file without loading it into memory.
pub fn file_digest(path: impl AsRef<Path>, algorithm: HashAlgorithm) -> AuthResult<String> {
    let file = File::open(path)?;
    Ok(digest_reader(file, algorithm)?)
}

/// Authenticates by comparing a file's digest with `expected`.
///
/// The computed digest is lower-case hex with no separators; `expected`
/// is compared verbatim.
pub fn file_hash_matches(
    path: impl AsRef<Path>,
    expected: &str,
    algorithm: HashAlgorithm,
) -> AuthResult<bool> {
    if expected.is_empty() {
        return Err(AuthError::InvalidArgument(
            "an empty string cannot be specified as the expected hash".to_string(),
        ));
    }
    Ok(file_digest(path, algorithm)? == expected)
}

fn digest_with<D: Digest + Write, R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut hasher = D::new();
    io::copy(&mut reader, &mut hasher)?;
    Ok(hasher.finalize().to_vec())
}
