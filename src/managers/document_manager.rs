//! Document Manager for Linkshelf.
//!
//! Implements `DocumentManagerTrait` — all mutations of the in-memory
//! category/link tree. Every operation validates before it mutates, so a
//! failed call leaves the document exactly as it was.

use crate::types::document::{BookmarksDocument, Category, Link, MoveDirection};
use crate::types::errors::DocumentError;

/// Trait defining the document mutation interface.
pub trait DocumentManagerTrait {
    fn add_category(&mut self, title: &str) -> Result<(), DocumentError>;
    fn rename_category(&mut self, index: usize, title: &str) -> Result<(), DocumentError>;
    fn delete_category(&mut self, index: usize) -> Result<Category, DocumentError>;
    /// Swaps the category with its neighbor. Returns the entry's resulting
    /// index; a boundary move is a no-op that returns `index` unchanged.
    fn move_category(&mut self, index: usize, direction: MoveDirection) -> Result<usize, DocumentError>;
    fn add_link(&mut self, category: usize, name: &str, url: &str) -> Result<(), DocumentError>;
    fn edit_link(&mut self, category: usize, link: usize, name: &str, url: &str) -> Result<(), DocumentError>;
    fn delete_link(&mut self, category: usize, link: usize) -> Result<Link, DocumentError>;
    fn move_link(&mut self, category: usize, link: usize, direction: MoveDirection) -> Result<usize, DocumentError>;
    fn document(&self) -> &BookmarksDocument;
    fn replace_document(&mut self, document: BookmarksDocument);
    fn category(&self, index: usize) -> Option<&Category>;
    fn link(&self, category: usize, link: usize) -> Option<&Link>;
    fn category_count(&self) -> usize;
}

/// In-memory document manager owning the single bookmarks tree.
pub struct DocumentManager {
    document: BookmarksDocument,
}

impl DocumentManager {
    pub fn new() -> Self {
        Self {
            document: BookmarksDocument::default(),
        }
    }

    pub fn with_document(document: BookmarksDocument) -> Self {
        Self { document }
    }

    /// Prepends `https://` when the URL carries no recognized scheme.
    pub fn normalize_url(url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("https://{}", url)
        }
    }

    /// Trims the input and rejects whitespace-only values.
    fn non_empty(value: &str, err: DocumentError) -> Result<&str, DocumentError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Err(err)
        } else {
            Ok(trimmed)
        }
    }

    /// Validates a link's name and URL, returning the normalized pair.
    fn validated_link(name: &str, url: &str) -> Result<Link, DocumentError> {
        let name = Self::non_empty(name, DocumentError::EmptyLinkName)?;
        let url = Self::non_empty(url, DocumentError::EmptyLinkUrl)?;
        Ok(Link {
            name: name.to_string(),
            url: Self::normalize_url(url),
        })
    }

    fn category_mut(&mut self, index: usize) -> Result<&mut Category, DocumentError> {
        self.document
            .categories
            .get_mut(index)
            .ok_or(DocumentError::InvalidCategoryIndex(index))
    }
}

impl Default for DocumentManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentManagerTrait for DocumentManager {
    /// Appends a new empty category to the end of the sequence.
    fn add_category(&mut self, title: &str) -> Result<(), DocumentError> {
        let title = Self::non_empty(title, DocumentError::EmptyTitle)?;
        self.document.categories.push(Category::new(title));
        Ok(())
    }

    /// Replaces the title of the category at `index`.
    fn rename_category(&mut self, index: usize, title: &str) -> Result<(), DocumentError> {
        let title = Self::non_empty(title, DocumentError::EmptyTitle)?.to_string();
        self.category_mut(index)?.title = title;
        Ok(())
    }

    /// Removes the category at `index` along with all of its links.
    fn delete_category(&mut self, index: usize) -> Result<Category, DocumentError> {
        if index >= self.document.categories.len() {
            return Err(DocumentError::InvalidCategoryIndex(index));
        }
        Ok(self.document.categories.remove(index))
    }

    fn move_category(
        &mut self,
        index: usize,
        direction: MoveDirection,
    ) -> Result<usize, DocumentError> {
        let len = self.document.categories.len();
        if index >= len {
            return Err(DocumentError::InvalidCategoryIndex(index));
        }
        match direction.neighbor(index, len) {
            Some(neighbor) => {
                self.document.categories.swap(index, neighbor);
                Ok(neighbor)
            }
            None => Ok(index),
        }
    }

    /// Appends a validated, normalized link to the category's list.
    fn add_link(&mut self, category: usize, name: &str, url: &str) -> Result<(), DocumentError> {
        let link = Self::validated_link(name, url)?;
        self.category_mut(category)?.links.push(link);
        Ok(())
    }

    /// Replaces the link in place with a validated, normalized one.
    fn edit_link(
        &mut self,
        category: usize,
        link: usize,
        name: &str,
        url: &str,
    ) -> Result<(), DocumentError> {
        let replacement = Self::validated_link(name, url)?;
        let links = &mut self.category_mut(category)?.links;
        let slot = links
            .get_mut(link)
            .ok_or(DocumentError::InvalidLinkIndex(link))?;
        *slot = replacement;
        Ok(())
    }

    fn delete_link(&mut self, category: usize, link: usize) -> Result<Link, DocumentError> {
        let links = &mut self.category_mut(category)?.links;
        if link >= links.len() {
            return Err(DocumentError::InvalidLinkIndex(link));
        }
        Ok(links.remove(link))
    }

    fn move_link(
        &mut self,
        category: usize,
        link: usize,
        direction: MoveDirection,
    ) -> Result<usize, DocumentError> {
        let links = &mut self.category_mut(category)?.links;
        let len = links.len();
        if link >= len {
            return Err(DocumentError::InvalidLinkIndex(link));
        }
        match direction.neighbor(link, len) {
            Some(neighbor) => {
                links.swap(link, neighbor);
                Ok(neighbor)
            }
            None => Ok(link),
        }
    }

    fn document(&self) -> &BookmarksDocument {
        &self.document
    }

    /// Replaces the tree wholesale, e.g. after loading a file.
    fn replace_document(&mut self, document: BookmarksDocument) {
        self.document = document;
    }

    fn category(&self, index: usize) -> Option<&Category> {
        self.document.categories.get(index)
    }

    fn link(&self, category: usize, link: usize) -> Option<&Link> {
        self.document.categories.get(category)?.links.get(link)
    }

    fn category_count(&self) -> usize {
        self.document.categories.len()
    }
}
