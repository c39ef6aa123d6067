//! App Core for Linkshelf.
//!
//! Central struct wiring the controller, the document store, and the
//! settings engine, with the startup/shutdown sequences.

use std::path::Path;

use crate::controller::EditorController;
use crate::services::document_store::{DocumentStore, DocumentStoreTrait};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::types::errors::StoreError;

/// Central application struct holding the controller and services.
pub struct App {
    pub controller: EditorController,
    pub store: DocumentStore,
    pub settings_engine: SettingsEngine,
}

impl App {
    /// Creates a new App with an empty document and default settings.
    pub fn new() -> Self {
        Self {
            controller: EditorController::new(),
            store: DocumentStore::new(),
            settings_engine: SettingsEngine::new(None),
        }
    }

    /// Startup sequence: load settings and reopen the last collection.
    ///
    /// A missing or unreadable last file is ignored — startup never aborts
    /// over a data error.
    pub fn startup(&mut self) {
        let _ = self.settings_engine.load();

        let last_file = self.settings_engine.settings().last_file.clone();
        if let Some(path) = last_file {
            let path = Path::new(&path);
            if path.exists() {
                let _ = self.load_file(path);
            }
        }
    }

    /// Loads a collection from `path`, replacing the in-memory document.
    ///
    /// On failure the current document (and selection) is left untouched.
    pub fn load_file(&mut self, path: &Path) -> Result<(), StoreError> {
        let document = self.store.load(path)?;
        self.controller.replace_document(document);
        let _ = self
            .settings_engine
            .set_last_file(Some(path.to_string_lossy().to_string()));
        Ok(())
    }

    /// Saves the whole document to the current file.
    ///
    /// Returns `StoreError::NoFile` when nothing has been loaded or
    /// saved-as yet; the UI falls back to save-as in that case.
    pub fn save_file(&mut self) -> Result<(), StoreError> {
        self.store.save(self.controller.document())
    }

    /// Saves the document to `path` and makes it the current file.
    pub fn save_file_as(&mut self, path: &Path) -> Result<(), StoreError> {
        self.store.save_as(path, self.controller.document())?;
        let _ = self
            .settings_engine
            .set_last_file(Some(path.to_string_lossy().to_string()));
        Ok(())
    }

    /// Shutdown sequence: flush settings.
    pub fn shutdown(&mut self) {
        let _ = self.settings_engine.save();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
