//! Checks that do not depend on a particular piece of hardware: OS
//! installation, user account, file contents and account credentials.

use crate::credential::{CredentialVerifier, Password};
use crate::error::AuthResult;
use crate::hash::{file_hash_matches, HashAlgorithm};
use crate::matching::{match_enumerated, MatchOutcome};
use crate::provider::IdentifierProvider;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Hardware-independent authentication checks.
#[derive(Clone)]
pub struct SoftwareAuth {
    provider: Arc<dyn IdentifierProvider>,
}

impl SoftwareAuth {
    /// Creates the checks over an identifier provider.
    pub fn new(provider: Arc<dyn IdentifierProvider>) -> Self {
        Self { provider }
    }

    /// Authenticates by operating system installation identifier
    /// (Windows product ID, machine-id).
    pub fn os_serial_number<S: AsRef<str>>(
        &self,
        serial_numbers: &[S],
    ) -> AuthResult<MatchOutcome> {
        match_enumerated(serial_numbers, "OS serial numbers", || {
            self.provider.os_serial_numbers()
        })
    }

    /// Authenticates by the account identifier of the current user.
    pub fn user_account_id<S: AsRef<str>>(&self, account_ids: &[S]) -> AuthResult<MatchOutcome> {
        match_enumerated(account_ids, "account identifiers", || {
            self.provider.current_user_id().map(|id| [id])
        })
    }

    /// Authenticates by the digest of a file's contents.
    pub fn file_hash(
        &self,
        path: impl AsRef<Path>,
        expected: &str,
        algorithm: HashAlgorithm,
    ) -> AuthResult<bool> {
        file_hash_matches(path, expected, algorithm)
    }

    /// Authenticates an account by username, optional domain and password.
    ///
    /// The verifier's answer is returned as is. The password is only lent
    /// to the verifier for the duration of the call.
    pub fn user_account(
        &self,
        verifier: &dyn CredentialVerifier,
        username: &str,
        domain: Option<&str>,
        password: &Password,
    ) -> bool {
        let verified = verifier.verify(username, domain, password.expose());
        debug!(username, domain = domain.unwrap_or(""), verified, "Account credential check");
        verified
    }
}
