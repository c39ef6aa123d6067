//! Property-based tests for the bookmarks document serialization round-trip.
//!
//! These tests verify that any document tree survives the trip through the
//! store's pretty-JSON serialization and back without data loss, and that
//! the tolerant reader fills in missing list keys.

use linkshelf::services::document_store::DocumentStore;
use linkshelf::types::document::{BookmarksDocument, Category, Link};
use proptest::prelude::*;

// --- Arbitrary strategies for the document tree ---

fn arb_link() -> impl Strategy<Value = Link> {
    ("[a-zA-Z0-9 .,'_-]{1,30}", "[a-zA-Z0-9:/._?=-]{1,60}")
        .prop_map(|(name, url)| Link { name, url })
}

fn arb_category() -> impl Strategy<Value = Category> {
    (
        "[a-zA-Z0-9 .,'_-]{1,30}",
        prop::collection::vec(arb_link(), 0..8),
    )
        .prop_map(|(title, links)| Category { title, links })
}

fn arb_document() -> impl Strategy<Value = BookmarksDocument> {
    prop::collection::vec(arb_category(), 0..6)
        .prop_map(|categories| BookmarksDocument { categories })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn document_roundtrip_preserves_tree(doc in arb_document()) {
        let json = DocumentStore::serialize(&doc).unwrap();
        let reparsed = DocumentStore::parse(&json).unwrap();
        prop_assert_eq!(reparsed, doc);
    }

    #[test]
    fn serialized_document_is_a_json_object(doc in arb_document()) {
        let json = DocumentStore::serialize(&doc).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        prop_assert!(value.is_object());
        prop_assert!(value.get("categories").unwrap().is_array());
    }

    #[test]
    fn category_without_links_key_parses_as_empty(title in "[a-zA-Z0-9 ]{1,20}") {
        let json = serde_json::json!({
            "categories": [{ "title": &title }]
        })
        .to_string();

        let doc = DocumentStore::parse(&json).unwrap();
        prop_assert_eq!(doc.categories.len(), 1);
        prop_assert_eq!(&doc.categories[0].title, &title);
        prop_assert!(doc.categories[0].links.is_empty());
    }
}
