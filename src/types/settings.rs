use serde::{Deserialize, Serialize};

/// Top-level editor settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorSettings {
    /// Path of the most recently opened collection, reopened on startup.
    pub last_file: Option<String>,
    pub window: WindowSettings,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            last_file: None,
            window: WindowSettings::default(),
        }
    }
}

/// Main window dimensions used when the editor starts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: 1100,
            height: 600,
        }
    }
}
