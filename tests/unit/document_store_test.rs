use linkshelf::services::document_store::{DocumentStore, DocumentStoreTrait};
use linkshelf::types::document::{BookmarksDocument, Category, Link};
use linkshelf::types::errors::StoreError;
use tempfile::TempDir;

fn sample_document() -> BookmarksDocument {
    let mut doc = BookmarksDocument::default();
    let mut dev = Category::new("Dev");
    dev.links.push(Link {
        name: "GitHub".to_string(),
        url: "https://github.com".to_string(),
    });
    dev.links.push(Link {
        name: "Docs.rs".to_string(),
        url: "https://docs.rs".to_string(),
    });
    doc.categories.push(dev);
    doc.categories.push(Category::new("Reading"));
    doc
}

// === Load ===

#[test]
fn test_load_parses_file_and_remembers_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bookmarks.json");
    std::fs::write(
        &path,
        r#"{"categories":[{"title":"Work","links":[{"name":"Mail","url":"https://mail.example.com"}]}]}"#,
    )
    .unwrap();

    let mut store = DocumentStore::new();
    let doc = store.load(&path).unwrap();
    assert_eq!(doc.categories.len(), 1);
    assert_eq!(doc.categories[0].links[0].name, "Mail");
    assert_eq!(store.file_path(), Some(path.as_path()));
    assert_eq!(store.file_name().as_deref(), Some("bookmarks.json"));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let mut store = DocumentStore::new();
    let result = store.load(&dir.path().join("nope.json"));
    assert!(matches!(result, Err(StoreError::Io(_))));
    assert!(store.file_path().is_none());
}

#[test]
fn test_load_malformed_json_leaves_store_untouched() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.json");
    let bad = dir.path().join("bad.json");
    std::fs::write(&good, r#"{"categories":[]}"#).unwrap();
    std::fs::write(&bad, "{ not json }").unwrap();

    let mut store = DocumentStore::new();
    store.load(&good).unwrap();

    let result = store.load(&bad);
    assert!(matches!(result, Err(StoreError::Parse(_))));
    // A failed load never switches the current file
    assert_eq!(store.file_path(), Some(good.as_path()));
}

#[test]
fn test_load_rejects_non_object_top_level() {
    let dir = TempDir::new().unwrap();
    let mut store = DocumentStore::new();

    for (name, text) in [("array.json", "[]"), ("string.json", "\"hi\""), ("number.json", "3")] {
        let path = dir.path().join(name);
        std::fs::write(&path, text).unwrap();
        let result = store.load(&path);
        assert!(
            matches!(result, Err(StoreError::Parse(_))),
            "{} must be rejected as wrong-shaped",
            name
        );
    }
    assert!(store.file_path().is_none());
}

#[test]
fn test_load_tolerates_missing_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sparse.json");
    std::fs::write(&path, r#"{"categories":[{"title":"Bare"}]}"#).unwrap();

    let mut store = DocumentStore::new();
    let doc = store.load(&path).unwrap();
    assert!(doc.categories[0].links.is_empty());
}

// === Save / Save As ===

#[test]
fn test_save_without_file_is_no_file_error() {
    let store = DocumentStore::new();
    let result = store.save(&sample_document());
    assert!(matches!(result, Err(StoreError::NoFile)));
}

#[test]
fn test_save_as_then_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bookmarks.json");
    let doc = sample_document();

    let mut store = DocumentStore::new();
    store.save_as(&path, &doc).unwrap();
    assert_eq!(store.file_path(), Some(path.as_path()));

    let mut store2 = DocumentStore::new();
    let loaded = store2.load(&path).unwrap();
    assert_eq!(loaded, doc);
}

#[test]
fn test_save_rewrites_current_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bookmarks.json");

    let mut store = DocumentStore::new();
    store.save_as(&path, &sample_document()).unwrap();

    let mut updated = sample_document();
    updated.categories.push(Category::new("Later"));
    store.save(&updated).unwrap();

    let mut store2 = DocumentStore::new();
    let loaded = store2.load(&path).unwrap();
    assert_eq!(loaded.categories.len(), 3);
}

#[test]
fn test_save_as_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deep").join("bookmarks.json");

    let mut store = DocumentStore::new();
    store.save_as(&path, &sample_document()).unwrap();
    assert!(path.exists());
}

#[test]
fn test_saved_file_is_pretty_printed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bookmarks.json");

    let mut store = DocumentStore::new();
    store.save_as(&path, &sample_document()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("\n"));
    assert!(text.contains("  \"categories\""));
}

// === File name ===

#[test]
fn test_file_name_before_any_file() {
    let store = DocumentStore::new();
    assert!(store.file_name().is_none());
    assert!(store.file_path().is_none());
}
