//! Interactive account credential checks.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Privileged collaborator that checks a username and password, e.g. an
/// interactive logon on Windows or PAM on Unix.
pub trait CredentialVerifier: Send + Sync {
    /// Returns true if the credentials are valid. `domain` is `None` for
    /// local accounts.
    fn verify(&self, username: &str, domain: Option<&str>, password: &str) -> bool;
}

impl<F> CredentialVerifier for F
where
    F: Fn(&str, Option<&str>, &str) -> bool + Send + Sync,
{
    fn verify(&self, username: &str, domain: Option<&str>, password: &str) -> bool {
        self(username, domain, password)
    }
}

/// Plaintext password, zeroized on drop and redacted from `Debug`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Password(String);

impl Password {
    /// Wraps a plaintext password.
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }

    /// Returns the plaintext for handing to a verifier.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Self(password)
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Self(password.to_string())
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Password").field(&"[REDACTED]").finish()
    }
}
