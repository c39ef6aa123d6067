// Linkshelf Document Store
// Loads and saves the bookmarks collection as a JSON file.
// The store remembers the current file path so a plain Save can rewrite
// the file that was last loaded or saved-as.

use std::fs;
use std::path::{Path, PathBuf};

use crate::types::document::BookmarksDocument;
use crate::types::errors::StoreError;

/// Trait defining the document persistence interface.
pub trait DocumentStoreTrait {
    fn load(&mut self, path: &Path) -> Result<BookmarksDocument, StoreError>;
    fn save(&self, document: &BookmarksDocument) -> Result<(), StoreError>;
    fn save_as(&mut self, path: &Path, document: &BookmarksDocument) -> Result<(), StoreError>;
    fn file_path(&self) -> Option<&Path>;
    fn file_name(&self) -> Option<String>;
}

/// Document store that persists the whole tree as pretty-printed JSON.
pub struct DocumentStore {
    file_path: Option<PathBuf>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self { file_path: None }
    }

    /// Parses JSON text into a document tree.
    ///
    /// The top level must be a JSON object. A missing `categories` key (or
    /// a missing `links` key on a category) is treated as an empty list;
    /// anything else malformed is an error.
    pub fn parse(text: &str) -> Result<BookmarksDocument, StoreError> {
        let value: serde_json::Value =
            serde_json::from_str(text).map_err(|e| StoreError::Parse(e.to_string()))?;
        // Serde would also accept a sequence encoding of the struct here.
        if !value.is_object() {
            return Err(StoreError::Parse(
                "expected a top-level JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| StoreError::Parse(e.to_string()))
    }

    /// Serializes the tree to pretty JSON with stable key order
    /// (`title`/`links`, `name`/`url`). Round-trips through `parse`.
    pub fn serialize(document: &BookmarksDocument) -> Result<String, StoreError> {
        serde_json::to_string_pretty(document).map_err(|e| StoreError::Serialize(e.to_string()))
    }

    fn write_to(path: &Path, document: &BookmarksDocument) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Io(format!("Failed to create directory: {}", e))
                })?;
            }
        }
        let json = Self::serialize(document)?;
        fs::write(path, json).map_err(|e| StoreError::Io(format!("Failed to write file: {}", e)))
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStoreTrait for DocumentStore {
    /// Reads and parses the file at `path`.
    ///
    /// On success the path becomes the current file. On failure nothing
    /// changes — the caller's in-memory document stays as it was.
    fn load(&mut self, path: &Path) -> Result<BookmarksDocument, StoreError> {
        let content = fs::read_to_string(path)
            .map_err(|e| StoreError::Io(format!("Failed to read file: {}", e)))?;
        let document = Self::parse(&content)?;
        self.file_path = Some(path.to_path_buf());
        Ok(document)
    }

    /// Writes the whole document to the current file.
    fn save(&self, document: &BookmarksDocument) -> Result<(), StoreError> {
        let path = self.file_path.as_deref().ok_or(StoreError::NoFile)?;
        Self::write_to(path, document)
    }

    /// Writes the document to `path` and makes it the current file.
    fn save_as(&mut self, path: &Path, document: &BookmarksDocument) -> Result<(), StoreError> {
        Self::write_to(path, document)?;
        self.file_path = Some(path.to_path_buf());
        Ok(())
    }

    fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// File name of the current file, for the UI's "Loaded: name.json" label.
    fn file_name(&self) -> Option<String> {
        self.file_path
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
    }
}
