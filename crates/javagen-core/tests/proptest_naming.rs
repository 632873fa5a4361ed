//! Property-based tests for identifier normalization
//!
//! Normalization must be a pure function of the key: the same key always yields the
//! same identifier, and the output only contains characters legal in Java identifiers.

use javagen_core::naming::{media_type_to_identifier, message_key_to_identifier};
use javagen_core::{ArtifactKind, ArtifactSpec, CatalogEntry, GeneratedIdentifier};
use proptest::prelude::*;

// Strategy: Generate message-code style keys
fn arb_message_key() -> impl Strategy<Value = String> {
    "[A-Z][A-Za-z0-9.-]{0,30}"
}

// Strategy: Generate media-type strings as found in mime.types
fn arb_media_type() -> impl Strategy<Value = String> {
    "[a-z]{1,12}/[a-z0-9][a-z0-9.+-]{0,30}"
}

proptest! {
    /// Property: message key normalization is deterministic and separator-free
    #[test]
    fn proptest_message_key_normalization_is_pure(key in arb_message_key()) {
        let first = message_key_to_identifier(&key);
        let second = message_key_to_identifier(&key);

        prop_assert_eq!(&first, &second);
        prop_assert!(!first.contains('.') && !first.contains('-'));
        prop_assert_eq!(first.len(), key.len());
    }

    /// Property: media type normalization yields an upper-case identifier
    #[test]
    fn proptest_media_type_normalization_is_pure(media_type in arb_media_type()) {
        let first = media_type_to_identifier(&media_type);

        prop_assert_eq!(&first, &media_type_to_identifier(&media_type));
        prop_assert!(first.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'));
        prop_assert!(GeneratedIdentifier::derive(ArtifactKind::TypeEnum, &media_type).is_ok());
    }

    /// Property: an identifier does not depend on the other entries or their order
    #[test]
    fn proptest_identifier_independent_of_neighbours(
        types in prop::collection::hash_set(arb_media_type(), 1..8)
    ) {
        let types: Vec<String> = types.into_iter().collect();
        let entries: Vec<CatalogEntry> = types
            .iter()
            .map(|t| CatalogEntry::media_type(t.clone(), ["ext"]))
            .collect();
        let mut reversed = entries.clone();
        reversed.reverse();

        let forward = ArtifactSpec::media_types("p", entries).identifiers();
        let backward = ArtifactSpec::media_types("p", reversed).identifiers();

        // Collisions are possible among random types; both orders must agree on that too
        prop_assert_eq!(forward.is_ok(), backward.is_ok());

        if let (Ok(forward), Ok(mut backward)) = (forward, backward) {
            backward.reverse();
            prop_assert_eq!(forward, backward);
        }
    }
}
