//! Existential matching and fail-closed outcomes.

use crate::error::{AuthError, AuthResult, ProviderError, ProviderResult};
use std::fmt;
use tracing::{debug, warn};

/// Result of a check that depends on enumerating a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum MatchOutcome {
    /// A reported identifier equals an expected one.
    Matched,
    /// Enumeration succeeded and nothing matched.
    NoMatch,
    /// Enumeration failed. Never authenticates.
    Unavailable(ProviderError),
}

impl MatchOutcome {
    /// True only for [`MatchOutcome::Matched`].
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched)
    }

    /// True if the identifier source could not be enumerated.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    /// The enumeration failure, if any.
    #[must_use]
    pub fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            Self::Unavailable(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matched => f.write_str("matched"),
            Self::NoMatch => f.write_str("no match"),
            Self::Unavailable(err) => write!(f, "unavailable ({err})"),
        }
    }
}

/// Returns true if any observed value equals any expected value.
///
/// Comparison is exact and case-sensitive.
pub fn any_match<S, I>(expected: &[S], observed: I) -> bool
where
    S: AsRef<str>,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    observed
        .into_iter()
        .any(|value| expected.iter().any(|e| e.as_ref() == value.as_ref()))
}

/// Rejects an empty expected list, or one containing an empty value.
pub(crate) fn require_expected<S: AsRef<str>>(expected: &[S], what: &str) -> AuthResult<()> {
    if expected.is_empty() {
        return Err(AuthError::InvalidArgument(format!(
            "none of the {what} required for authentication have been specified"
        )));
    }
    if expected.iter().any(|e| e.as_ref().is_empty()) {
        return Err(AuthError::InvalidArgument(format!(
            "an empty string cannot be specified as a {what} to authenticate"
        )));
    }
    Ok(())
}

/// Validates `expected`, then enumerates and matches.
///
/// `enumerate` is not called when validation fails.
pub(crate) fn match_enumerated<S, F, I>(
    expected: &[S],
    what: &str,
    enumerate: F,
) -> AuthResult<MatchOutcome>
where
    S: AsRef<str>,
    F: FnOnce() -> ProviderResult<I>,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    require_expected(expected, what)?;

    let outcome = match enumerate() {
        Ok(observed) => {
            if any_match(expected, observed) {
                MatchOutcome::Matched
            } else {
                MatchOutcome::NoMatch
            }
        }
        Err(err) => {
            warn!(check = what, error = %err, "Identifier enumeration failed");
            MatchOutcome::Unavailable(err)
        }
    };
    debug!(check = what, outcome = %outcome, "Authentication check evaluated");
    Ok(outcome)
}
