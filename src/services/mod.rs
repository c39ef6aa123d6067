// Linkshelf services
// Services handle persistence: the bookmarks file itself and editor settings.

pub mod document_store;
pub mod settings_engine;
