use devauth_auth::{AuthError, MatchOutcome, ProviderError};

#[test]
fn error_display_invalid_argument() {
    let err = AuthError::InvalidArgument("no serial numbers".into());
    let msg = format!("{err}");
    assert!(msg.contains("invalid argument"));
    assert!(msg.contains("no serial numbers"));
}

#[test]
fn error_display_device_not_defined() {
    let err = AuthError::DeviceNotDefined("PC-9".into());
    assert!(format!("{err}").contains("PC-9"));
}

#[test]
fn error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err: AuthError = io.into();
    assert!(format!("{err}").contains("I/O error"));
}

#[test]
fn provider_error_display() {
    let err = ProviderError::unavailable("network adapters", "permission denied");
    let msg = format!("{err}");
    assert!(msg.contains("network adapters"));
    assert!(msg.contains("permission denied"));

    let err = ProviderError::Unsupported("disk drives");
    assert!(format!("{err}").contains("not supported"));
}

#[test]
fn outcome_accessors() {
    assert!(MatchOutcome::Matched.is_match());
    assert!(!MatchOutcome::NoMatch.is_match());
    assert!(!MatchOutcome::NoMatch.is_unavailable());
    assert!(MatchOutcome::NoMatch.provider_error().is_none());

    let outcome = MatchOutcome::Unavailable(ProviderError::Unsupported("disk drives"));
    assert!(!outcome.is_match());
    assert!(outcome.is_unavailable());
    assert_eq!(
        outcome.provider_error(),
        Some(&ProviderError::Unsupported("disk drives"))
    );
}

#[test]
fn error_is_debug() {
    let err = AuthError::InvalidArgument("x".into());
    let _ = format!("{err:?}");
}
