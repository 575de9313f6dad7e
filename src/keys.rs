//! Public metadata keys and their PDF name form.
//!
//! A PDF name is written `/Title` in file syntax. lopdf's lexer consumes the
//! leading solidus and stores the name as `b"Title"`, so the prefix is added
//! on write by using the key bytes as the name and stripped on read by taking
//! the name bytes as the key. A name whose bytes themselves start with `/`
//! (written `/#2FTitle`) keeps that inner solidus.

use crate::{MetadataError, Result};

/// The eight document information keys reserved by the PDF standard.
pub const STANDARD_KEYS: [&str; 8] = [
    "Producer",
    "CreationDate",
    "Creator",
    "Author",
    "Subject",
    "Title",
    "Keywords",
    "ModDate",
];

const NAME_PREFIX: u8 = b'/';

/// Returns `true` when `key` (unprefixed) is one of [`STANDARD_KEYS`].
pub fn is_standard_key(key: &str) -> bool {
    STANDARD_KEYS.contains(&key)
}

/// Check a caller key against the key contract and return the name bytes it
/// is stored under.
pub(crate) fn to_name(key: &str) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(invalid(key, "key is empty"));
    }
    if key.as_bytes()[0] == NAME_PREFIX {
        return Err(invalid(key, "key must not start with '/'"));
    }
    if key.chars().any(char::is_whitespace) {
        return Err(invalid(key, "key must not contain whitespace"));
    }
    Ok(key.as_bytes().to_vec())
}

/// Turn stored name bytes back into a public key.
pub(crate) fn from_name(name: &[u8]) -> String {
    String::from_utf8_lossy(name).into_owned()
}

fn invalid(key: &str, reason: &str) -> MetadataError {
    MetadataError::InvalidKey(key.into(), reason.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_key_maps_to_its_bytes() {
        assert_eq!(to_name("Reviewer").unwrap(), b"Reviewer".to_vec());
    }

    #[test]
    fn prefixed_key_is_rejected() {
        let err = to_name("/Reviewer").unwrap_err();
        assert!(matches!(err, MetadataError::InvalidKey(ref k, _) if k == "/Reviewer"));
    }

    #[test]
    fn empty_and_whitespace_keys_are_rejected() {
        assert!(to_name("").is_err());
        assert!(to_name("Review Date").is_err());
        assert!(to_name("Tab\tKey").is_err());
    }

    #[test]
    fn from_name_keeps_inner_solidus() {
        assert_eq!(from_name(b"Foo"), "Foo");
        assert_eq!(from_name(b"/Foo"), "/Foo");
        assert_eq!(from_name(b"Foo/Bar"), "Foo/Bar");
    }

    #[test]
    fn name_round_trips_through_key() {
        let name = to_name("Reviewer").unwrap();
        assert_eq!(from_name(&name), "Reviewer");
    }

    #[test]
    fn standard_keys_are_recognised() {
        for key in STANDARD_KEYS {
            assert!(is_standard_key(key));
        }
        assert!(!is_standard_key("Reviewer"));
        assert!(!is_standard_key("title"));
    }
}
