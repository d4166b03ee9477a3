//! Device and account authentication checks.
//!
//! Each check compares the identifiers this machine reports against one
//! or more expected values and succeeds if any reported value equals any
//! expected value. Checks are stateless and independent of each other.
//!
//! # Fail-closed
//!
//! - An empty list of expected values is an [`AuthError::InvalidArgument`],
//!   raised before anything is enumerated.
//! - When the [`IdentifierProvider`] cannot enumerate a resource the check
//!   returns [`MatchOutcome::Unavailable`]. That outcome never authenticates,
//!   but callers can tell it apart from [`MatchOutcome::NoMatch`] for
//!   diagnostics.
//!
//! # Example
//!
//! ```no_run
//! use devauth_auth::{HardwareAuth, SystemProvider};
//! use std::sync::Arc;
//!
//! let hardware = HardwareAuth::new(Arc::new(SystemProvider::new()));
//! let outcome = hardware.system_disk(&["SN12345"])?;
//! if !outcome.is_match() {
//!     eprintln!("not running on a registered machine: {outcome}");
//! }
//! # Ok::<(), devauth_auth::AuthError>(())
//! ```

mod credential;
mod error;
mod hardware;
mod hash;
mod matching;
mod provider;
mod software;
mod system;

pub use credential::{CredentialVerifier, Password};
pub use error::{AuthError, AuthResult, ProviderError, ProviderResult};
pub use hardware::HardwareAuth;
pub use hash::{digest_reader, file_digest, file_hash_matches, HashAlgorithm};
pub use matching::{any_match, MatchOutcome};
pub use provider::{
    AdapterKind, DiskClass, DiskIdentifier, DiskInfo, IdentifierProvider, NetworkAdapter,
    INTERFACE_IDE,
};
pub use software::SoftwareAuth;
pub use system::SystemProvider;
