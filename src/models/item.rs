//! Per-file payload handed to the preview renderer.

use serde::{Deserialize, Serialize};

/// Opaque file descriptor.
///
/// The navigation core only reads [`FileItem::size`]; everything else is
/// carried through untouched for the preview renderer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileItem {
    /// Full path of the file relative to the library root
    pub path: String,
    /// File size in bytes
    pub size: u64,
    /// Optional display title
    #[serde(default)]
    pub title: Option<String>,
    /// MIME type, if known
    #[serde(default)]
    pub content_type: Option<String>,
    /// Last modification time as Unix timestamp
    #[serde(default)]
    pub modified: Option<u64>,
}

impl FileItem {
    /// Create an item with only a path and a size.
    pub fn new(path: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
            ..Default::default()
        }
    }

    /// Last path segment (the file name).
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Lowercased extension, if the name has one.
    pub fn extension(&self) -> Option<String> {
        let name = self.file_name();
        name.rsplit_once('.')
            .filter(|(stem, _)| !stem.is_empty())
            .map(|(_, ext)| ext.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(FileItem::new("a/b/report.pdf", 1).file_name(), "report.pdf");
        assert_eq!(FileItem::new("notes.txt", 1).file_name(), "notes.txt");
    }

    #[test]
    fn test_extension() {
        assert_eq!(FileItem::new("a/photo.JPG", 1).extension().as_deref(), Some("jpg"));
        assert_eq!(FileItem::new("Makefile", 1).extension(), None);
        assert_eq!(FileItem::new(".profile", 1).extension(), None);
    }
}
