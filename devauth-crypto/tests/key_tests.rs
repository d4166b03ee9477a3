use devauth_crypto::{derive_key, CryptoError, KEY_SIZE};

#[test]
fn guid_with_hyphens_is_accepted() {
    let key = derive_key("0123abcd-4567-89ef-0123-456789abcdef").unwrap();
    assert_eq!(key.as_bytes().len(), KEY_SIZE);
    assert_eq!(&key.as_bytes()[..], b"0123abcd456789ef0123456789abcdef");
}

#[test]
fn hyphen_placement_does_not_matter() {
    let a = derive_key("11111111222233334444555566667777").unwrap();
    let b = derive_key("1-1-1-1-1-1-1-1222233334444555566667777").unwrap();
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn key_is_case_sensitive() {
    let lower = derive_key("aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee").unwrap();
    let upper = derive_key("AAAAAAAA-BBBB-CCCC-DDDD-EEEEEEEEEEEE").unwrap();
    assert_ne!(lower.as_bytes(), upper.as_bytes());
}

#[test]
fn short_identifier_fails() {
    let err = derive_key("1234-5678").unwrap_err();
    assert!(matches!(
        err,
        CryptoError::InvalidKeyLength {
            expected: 32,
            actual: 8
        }
    ));
}

#[test]
fn long_identifier_fails() {
    let err = derive_key(&"a".repeat(33)).unwrap_err();
    assert!(matches!(err, CryptoError::InvalidKeyLength { actual: 33, .. }));
}

#[test]
fn empty_and_hyphen_only_fail() {
    assert!(derive_key("").is_err());
    assert!(derive_key("--------").is_err());
}

#[test]
fn multibyte_characters_count_as_bytes() {
    // 16 two-byte characters are 32 bytes of key material.
    let key = derive_key(&"é".repeat(16)).unwrap();
    assert_eq!(key.as_bytes().len(), KEY_SIZE);
    assert!(derive_key(&"é".repeat(32)).is_err());
}

#[test]
fn debug_redacts_key() {
    let key = derive_key("11111111-2222-3333-4444-555566667777").unwrap();
    let debug = format!("{key:?}");
    assert!(debug.contains("REDACTED"));
    assert!(!debug.contains("1111"));
}
