//! Presentation Controller for Linkshelf.
//!
//! Owns the `DocumentManager` plus the transient selection state (which
//! category and link the user is focused on — never persisted), projects
//! the document into the two list views, and dispatches user actions.
//!
//! Control flow is one way: validate selection → delegate to the document
//! manager → the caller re-renders from the view accessors. Nothing here
//! pushes to a view asynchronously.

use std::io;

use crate::managers::document_manager::{DocumentManager, DocumentManagerTrait};
use crate::types::document::{BookmarksDocument, Link, MoveDirection};
use crate::types::errors::{ControllerError, DocumentError};

/// External collaborator that launches a URL outside the editor.
pub trait UrlOpener {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Controller holding the document and current selection.
pub struct EditorController {
    manager: DocumentManager,
    selected_category: Option<usize>,
    selected_link: Option<usize>,
}

impl EditorController {
    pub fn new() -> Self {
        Self {
            manager: DocumentManager::new(),
            selected_category: None,
            selected_link: None,
        }
    }

    pub fn with_document(document: BookmarksDocument) -> Self {
        Self {
            manager: DocumentManager::with_document(document),
            selected_category: None,
            selected_link: None,
        }
    }

    // --- View projection ---

    pub fn document(&self) -> &BookmarksDocument {
        self.manager.document()
    }

    /// Category titles in document order — the left list view.
    pub fn category_titles(&self) -> Vec<String> {
        self.manager
            .document()
            .categories
            .iter()
            .map(|c| c.title.clone())
            .collect()
    }

    /// (name, url) rows of the selected category — the right list view.
    /// Empty when no category is selected.
    pub fn link_rows(&self) -> Vec<(String, String)> {
        match self.selected_category.and_then(|i| self.manager.category(i)) {
            Some(category) => category
                .links
                .iter()
                .map(|l| (l.name.clone(), l.url.clone()))
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn selected_category(&self) -> Option<usize> {
        self.selected_category
    }

    pub fn selected_link(&self) -> Option<usize> {
        self.selected_link
    }

    /// The currently selected link, when both selections are active.
    pub fn selected_link_entry(&self) -> Option<&Link> {
        let category = self.selected_category?;
        let link = self.selected_link?;
        self.manager.link(category, link)
    }

    // --- Selection ---

    /// Selects the category at `index` and clears any link selection.
    pub fn select_category(&mut self, index: usize) -> Result<(), ControllerError> {
        if self.manager.category(index).is_none() {
            return Err(ControllerError::Document(
                DocumentError::InvalidCategoryIndex(index),
            ));
        }
        self.selected_category = Some(index);
        self.selected_link = None;
        Ok(())
    }

    /// Selects a link within the selected category.
    pub fn select_link(&mut self, index: usize) -> Result<(), ControllerError> {
        let category = self.require_category()?;
        if self.manager.link(category, index).is_none() {
            return Err(ControllerError::Document(
                DocumentError::InvalidLinkIndex(index),
            ));
        }
        self.selected_link = Some(index);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected_category = None;
        self.selected_link = None;
    }

    fn require_category(&self) -> Result<usize, ControllerError> {
        self.selected_category
            .ok_or(ControllerError::NoCategorySelected)
    }

    fn require_link(&self) -> Result<(usize, usize), ControllerError> {
        let category = self.require_category()?;
        let link = self.selected_link.ok_or(ControllerError::NoLinkSelected)?;
        Ok((category, link))
    }

    // --- Category actions ---

    /// Appends a category. Requires no selection; selection is untouched.
    pub fn add_category(&mut self, title: &str) -> Result<(), ControllerError> {
        self.manager.add_category(title)?;
        Ok(())
    }

    pub fn rename_selected_category(&mut self, title: &str) -> Result<(), ControllerError> {
        let index = self.require_category()?;
        self.manager.rename_category(index, title)?;
        Ok(())
    }

    /// Deletes the selected category and all its links; selection clears —
    /// no successor is implicitly selected.
    pub fn delete_selected_category(&mut self) -> Result<(), ControllerError> {
        let index = self.require_category()?;
        self.manager.delete_category(index)?;
        self.clear_selection();
        Ok(())
    }

    /// Moves the selected category one step; selection follows the entry.
    /// A boundary move is absorbed as a no-op.
    pub fn move_selected_category(
        &mut self,
        direction: MoveDirection,
    ) -> Result<(), ControllerError> {
        let index = self.require_category()?;
        let new_index = self.manager.move_category(index, direction)?;
        self.selected_category = Some(new_index);
        self.selected_link = None;
        Ok(())
    }

    // --- Link actions ---

    /// Appends a link to the selected category.
    pub fn add_link(&mut self, name: &str, url: &str) -> Result<(), ControllerError> {
        let category = self.require_category()?;
        self.manager.add_link(category, name, url)?;
        Ok(())
    }

    pub fn edit_selected_link(&mut self, name: &str, url: &str) -> Result<(), ControllerError> {
        let (category, link) = self.require_link()?;
        self.manager.edit_link(category, link, name, url)?;
        Ok(())
    }

    /// Deletes the selected link; the link selection clears, the category
    /// selection survives.
    pub fn delete_selected_link(&mut self) -> Result<(), ControllerError> {
        let (category, link) = self.require_link()?;
        self.manager.delete_link(category, link)?;
        self.selected_link = None;
        Ok(())
    }

    /// Moves the selected link one step; selection follows the entry.
    pub fn move_selected_link(&mut self, direction: MoveDirection) -> Result<(), ControllerError> {
        let (category, link) = self.require_link()?;
        let new_index = self.manager.move_link(category, link, direction)?;
        self.selected_link = Some(new_index);
        Ok(())
    }

    /// Hands the selected link's stored URL to the opener collaborator.
    /// Model state is untouched; spawn failures are deliberately swallowed,
    /// only a missing selection is an error.
    pub fn open_selected_link(&self, opener: &dyn UrlOpener) -> Result<(), ControllerError> {
        let (category, link) = self.require_link()?;
        if let Some(entry) = self.manager.link(category, link) {
            // Spawn failures are not data errors.
            let _ = opener.open(&entry.url);
        }
        Ok(())
    }

    // --- Document lifecycle ---

    /// Replaces the tree wholesale after a load; selection clears.
    pub fn replace_document(&mut self, document: BookmarksDocument) {
        self.manager.replace_document(document);
        self.clear_selection();
    }
}

impl Default for EditorController {
    fn default() -> Self {
        Self::new()
    }
}
