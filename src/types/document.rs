use serde::{Deserialize, Serialize};

/// The full in-memory bookmarks tree, equivalent to the persisted JSON file.
///
/// Category order is meaningful — it is the display and export order.
/// A missing `categories` key on load is treated as an empty list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookmarksDocument {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// A named bucket holding an ordered list of links.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub title: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl Category {
    /// Creates a category with the given title and no links.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            links: Vec::new(),
        }
    }
}

/// A named URL entry belonging to exactly one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Link {
    pub name: String,
    pub url: String,
}

/// Direction for a single-step reorder of a category or link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

impl MoveDirection {
    /// Index of the neighbor to swap with, or `None` when the move would
    /// leave the sequence of the given length (a boundary no-op).
    pub fn neighbor(self, index: usize, len: usize) -> Option<usize> {
        match self {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => {
                let next = index + 1;
                (next < len).then_some(next)
            }
        }
    }
}
