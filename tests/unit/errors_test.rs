use linkshelf::types::errors::*;

// === DocumentError Tests ===

#[test]
fn document_error_empty_title_display() {
    let err = DocumentError::EmptyTitle;
    assert_eq!(err.to_string(), "Category title cannot be empty");
}

#[test]
fn document_error_empty_link_fields_display() {
    assert_eq!(
        DocumentError::EmptyLinkName.to_string(),
        "Link name cannot be empty"
    );
    assert_eq!(
        DocumentError::EmptyLinkUrl.to_string(),
        "Link URL cannot be empty"
    );
}

#[test]
fn document_error_invalid_index_display() {
    assert_eq!(
        DocumentError::InvalidCategoryIndex(7).to_string(),
        "Invalid category index: 7"
    );
    assert_eq!(
        DocumentError::InvalidLinkIndex(99).to_string(),
        "Invalid link index: 99"
    );
}

#[test]
fn document_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(DocumentError::EmptyTitle);
    assert!(err.source().is_none());
}

// === StoreError Tests ===

#[test]
fn store_error_display_variants() {
    assert_eq!(
        StoreError::Io("permission denied".to_string()).to_string(),
        "Bookmarks file I/O error: permission denied"
    );
    assert_eq!(
        StoreError::Parse("expected value at line 1".to_string()).to_string(),
        "Failed to parse bookmarks file: expected value at line 1"
    );
    assert_eq!(
        StoreError::Serialize("key must be a string".to_string()).to_string(),
        "Failed to serialize bookmarks: key must be a string"
    );
    assert_eq!(StoreError::NoFile.to_string(), "No bookmarks file selected");
}

#[test]
fn store_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(StoreError::NoFile);
    assert!(err.source().is_none());
}

// === ControllerError Tests ===

#[test]
fn controller_error_selection_display() {
    assert_eq!(
        ControllerError::NoCategorySelected.to_string(),
        "Please select a category first"
    );
    assert_eq!(
        ControllerError::NoLinkSelected.to_string(),
        "Please select a link first"
    );
}

#[test]
fn controller_error_wraps_document_error() {
    let err = ControllerError::from(DocumentError::InvalidCategoryIndex(3));
    assert_eq!(err, ControllerError::Document(DocumentError::InvalidCategoryIndex(3)));
    // Display passes through the inner message
    assert_eq!(err.to_string(), "Invalid category index: 3");
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        SettingsError::SerializationError("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
}

#[test]
fn settings_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(SettingsError::IoError("oops".to_string()));
    assert!(err.source().is_none());
}
