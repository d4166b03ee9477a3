mod common;

use common::{strings, unavailable, FakeProvider, USER_SID};
use devauth_auth::{
    AuthError, CredentialVerifier, HashAlgorithm, MatchOutcome, Password, SoftwareAuth,
};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn software(provider: FakeProvider) -> (SoftwareAuth, Arc<FakeProvider>) {
    let provider = Arc::new(provider);
    (SoftwareAuth::new(provider.clone()), provider)
}

// ── OS serial number ─────────────────────────────────────────────

#[test]
fn os_serial_number_matches() {
    let (sw, _) = software(FakeProvider {
        os: Ok(strings(&["00330-80000-00000-AA123"])),
        ..Default::default()
    });
    assert!(sw
        .os_serial_number(&["00330-80000-00000-AA999", "00330-80000-00000-AA123"])
        .unwrap()
        .is_match());
    assert_eq!(
        sw.os_serial_number(&["00330-80000-00000-AA999"]).unwrap(),
        MatchOutcome::NoMatch
    );
}

#[test]
fn os_serial_number_unavailable() {
    let (sw, _) = software(FakeProvider {
        os: Err(unavailable("OS serial number")),
        ..Default::default()
    });
    assert!(sw.os_serial_number(&["x"]).unwrap().is_unavailable());
}

// ── Account identifier ───────────────────────────────────────────

#[test]
fn user_account_id_matches_current_user() {
    let (sw, _) = software(FakeProvider::default());
    assert!(sw.user_account_id(&["S-1-5-18", USER_SID]).unwrap().is_match());
    assert!(!sw.user_account_id(&["S-1-5-18"]).unwrap().is_match());
}

#[test]
fn user_account_id_requires_input() {
    let (sw, provider) = software(FakeProvider::default());
    let none: Vec<String> = vec![];
    assert!(matches!(sw.user_account_id(&none), Err(AuthError::InvalidArgument(_))));
    assert_eq!(provider.calls(), 0);
}

#[test]
fn user_account_id_unavailable() {
    let (sw, _) = software(FakeProvider {
        user: Err(unavailable("current user")),
        ..Default::default()
    });
    let outcome = sw.user_account_id(&[USER_SID]).unwrap();
    assert!(outcome.is_unavailable());
    assert!(!outcome.is_match());
}

// ── Credentials ──────────────────────────────────────────────────

struct RecordingVerifier {
    calls: AtomicUsize,
    seen: Mutex<Option<(String, Option<String>)>>,
    answer: bool,
}

impl CredentialVerifier for RecordingVerifier {
    fn verify(&self, username: &str, domain: Option<&str>, password: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.seen.lock().unwrap() = Some((username.to_string(), domain.map(String::from)));
        self.answer && password == "correct horse"
    }
}

#[test]
fn user_account_returns_verifier_answer() {
    let (sw, _) = software(FakeProvider::default());
    let verifier = RecordingVerifier {
        calls: AtomicUsize::new(0),
        seen: Mutex::new(None),
        answer: true,
    };

    assert!(sw.user_account(&verifier, "alice", Some("CORP"), &Password::new("correct horse")));
    assert!(!sw.user_account(&verifier, "alice", None, &Password::new("wrong")));
    assert_eq!(verifier.calls.load(Ordering::SeqCst), 2);
    assert_eq!(
        verifier.seen.lock().unwrap().clone(),
        Some(("alice".to_string(), None))
    );
}

#[test]
fn user_account_accepts_closures() {
    let (sw, provider) = software(FakeProvider::default());
    let deny_all = |_: &str, _: Option<&str>, _: &str| false;
    assert!(!sw.user_account(&deny_all, "root", None, &"hunter2".into()));
    // Credential checks never consult the identifier provider.
    assert_eq!(provider.calls(), 0);
}

#[test]
fn password_is_redacted_in_debug() {
    let password = Password::new("hunter2");
    let debug = format!("{password:?}");
    assert!(debug.contains("REDACTED"));
    assert!(!debug.contains("hunter2"));
    assert_eq!(password.expose(), "hunter2");
}

// ── File hash ────────────────────────────────────────────────────

#[test]
fn file_hash_through_software_auth() {
    let (sw, _) = software(FakeProvider::default());
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("license.txt");
    std::fs::write(&path, b"abc").unwrap();

    assert!(sw
        .file_hash(
            &path,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            HashAlgorithm::Sha256
        )
        .unwrap());
    assert!(!sw
        .file_hash(&path, "900150983cd24fb0d6963f7d28e17f72", HashAlgorithm::Sha256)
        .unwrap());
}
