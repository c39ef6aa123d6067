use std::fmt;

// === DocumentError ===

/// Errors related to document model mutations.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentError {
    /// A category title was empty or whitespace-only.
    EmptyTitle,
    /// A link name was empty or whitespace-only.
    EmptyLinkName,
    /// A link URL was empty or whitespace-only.
    EmptyLinkUrl,
    /// The provided category index is out of bounds.
    InvalidCategoryIndex(usize),
    /// The provided link index is out of bounds.
    InvalidLinkIndex(usize),
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::EmptyTitle => write!(f, "Category title cannot be empty"),
            DocumentError::EmptyLinkName => write!(f, "Link name cannot be empty"),
            DocumentError::EmptyLinkUrl => write!(f, "Link URL cannot be empty"),
            DocumentError::InvalidCategoryIndex(index) => {
                write!(f, "Invalid category index: {}", index)
            }
            DocumentError::InvalidLinkIndex(index) => {
                write!(f, "Invalid link index: {}", index)
            }
        }
    }
}

impl std::error::Error for DocumentError {}

// === StoreError ===

/// Errors related to loading and saving the bookmarks file.
#[derive(Debug)]
pub enum StoreError {
    /// The file could not be read or written.
    Io(String),
    /// The file content is not valid JSON or not the expected shape.
    Parse(String),
    /// The document could not be serialized.
    Serialize(String),
    /// A save was requested without a current file path.
    NoFile,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(msg) => write!(f, "Bookmarks file I/O error: {}", msg),
            StoreError::Parse(msg) => write!(f, "Failed to parse bookmarks file: {}", msg),
            StoreError::Serialize(msg) => {
                write!(f, "Failed to serialize bookmarks: {}", msg)
            }
            StoreError::NoFile => write!(f, "No bookmarks file selected"),
        }
    }
}

impl std::error::Error for StoreError {}

// === ControllerError ===

/// Errors related to controller actions on the current selection.
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerError {
    /// An action requiring a category selection was invoked with none.
    NoCategorySelected,
    /// An action requiring a link selection was invoked with none.
    NoLinkSelected,
    /// The delegated document mutation failed.
    Document(DocumentError),
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::NoCategorySelected => {
                write!(f, "Please select a category first")
            }
            ControllerError::NoLinkSelected => write!(f, "Please select a link first"),
            ControllerError::Document(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ControllerError {}

impl From<DocumentError> for ControllerError {
    fn from(err: DocumentError) -> Self {
        ControllerError::Document(err)
    }
}

// === SettingsError ===

/// Errors related to editor settings persistence.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
