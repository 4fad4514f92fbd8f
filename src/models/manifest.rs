//! Manifest types: the flat, path-tagged description of a library.

use serde::{Deserialize, Serialize};

use super::FileItem;
use crate::core::error::ManifestError;

/// Root manifest structure from a library JSON document.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Manifest {
    /// File entries
    #[serde(default)]
    pub files: Vec<FileEntry>,
    /// Directories that must exist even when empty
    #[serde(default)]
    pub directories: Vec<DirectoryEntry>,
}

impl Manifest {
    /// Parse a manifest from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a manifest file.
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self, ManifestError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// File entry from the manifest.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FileEntry {
    /// File path (relative to library root)
    pub path: String,
    /// File size in bytes
    #[serde(default)]
    pub size: u64,
    /// Display title
    #[serde(default)]
    pub title: Option<String>,
    /// MIME type
    #[serde(default)]
    pub content_type: Option<String>,
    /// Last modification time (Unix timestamp)
    #[serde(default)]
    pub modified: Option<u64>,
}

impl FileEntry {
    /// Convert to the item carried by the tree.
    pub fn to_item(&self) -> FileItem {
        FileItem {
            path: self.path.clone(),
            size: self.size,
            title: self.title.clone(),
            content_type: self.content_type.clone(),
            modified: self.modified,
        }
    }
}

/// Directory entry from the manifest.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DirectoryEntry {
    /// Directory path (relative to library root)
    pub path: String,
}
