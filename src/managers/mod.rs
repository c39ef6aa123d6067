// Linkshelf state managers
// Managers handle stateful operations on the in-memory bookmarks tree.

pub mod document_manager;
