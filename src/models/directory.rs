//! Directory tree representation.
//!
//! A [`DirectoryNode`] is the contents of exactly one folder. Children are
//! either folders (which are themselves nodes) or files carrying a
//! [`FileItem`]; the two cases are separate variants of [`Entry`] so a folder
//! can never hold an item and a file can never hold children.
//!
//! The tree is built once (see [`crate::core::library`]) and is read-only
//! afterwards.

use super::FileItem;
use crate::core::error::ResolveError;

// =============================================================================
// Entries
// =============================================================================

/// A named file inside a directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileNode {
    name: String,
    item: FileItem,
}

impl FileNode {
    pub fn new(name: impl Into<String>, item: FileItem) -> Self {
        Self {
            name: name.into(),
            item,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn item(&self) -> &FileItem {
        &self.item
    }
}

/// A child descriptor of a [`DirectoryNode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Folder(DirectoryNode),
    File(FileNode),
}

impl Entry {
    /// Name of the entry, unique among its siblings.
    pub fn name(&self) -> &str {
        match self {
            Entry::Folder(dir) => dir.name(),
            Entry::File(file) => file.name(),
        }
    }

    pub fn as_folder(&self) -> Option<&DirectoryNode> {
        match self {
            Entry::Folder(dir) => Some(dir),
            Entry::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            Entry::File(file) => Some(file),
            Entry::Folder(_) => None,
        }
    }
}

// =============================================================================
// DirectoryNode
// =============================================================================

/// Outcome of placing a file into a directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Placement {
    /// New entry appended
    Inserted,
    /// Existing file with the same name got the new item
    Replaced,
    /// A folder already owns the name
    Blocked,
}

/// The contents of one folder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryNode {
    name: String,
    children: Vec<Entry>,
}

impl DirectoryNode {
    /// Create an empty directory.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Create a directory from a list of entries.
    ///
    /// Entries whose name is already taken by an earlier sibling are dropped,
    /// as are names no path can address (empty, or containing `/`).
    pub fn with_entries(name: impl Into<String>, entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut dir = Self::new(name);
        for entry in entries {
            if !is_addressable(entry.name()) {
                tracing::warn!(
                    directory = %dir.name,
                    entry = %entry.name(),
                    "unaddressable entry name dropped"
                );
                continue;
            }
            if dir.position(entry.name()).is_some() {
                tracing::warn!(
                    directory = %dir.name,
                    entry = %entry.name(),
                    "duplicate sibling name dropped"
                );
                continue;
            }
            dir.children.push(entry);
        }
        dir
    }

    /// Segment label of this node. The root may carry a synthetic label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Child entries in their original order.
    pub fn entries(&self) -> &[Entry] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Look up a child by exact name.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.children.iter().find(|entry| entry.name() == name)
    }

    /// Resolve a single hop to a child folder.
    pub fn resolve(&self, segment: &str) -> Result<&DirectoryNode, ResolveError> {
        match self.get(segment) {
            Some(Entry::Folder(dir)) => Ok(dir),
            Some(Entry::File(_)) => Err(ResolveError::NotAFolder(segment.to_string())),
            None => Err(ResolveError::NotFound(segment.to_string())),
        }
    }

    /// Look up a child file by exact name.
    pub fn file(&self, name: &str) -> Result<&FileNode, ResolveError> {
        match self.get(name) {
            Some(Entry::File(file)) => Ok(file),
            Some(Entry::Folder(_)) => Err(ResolveError::NotAFile(name.to_string())),
            None => Err(ResolveError::NotFound(name.to_string())),
        }
    }

    /// Child folders in original order.
    pub fn folders(&self) -> impl Iterator<Item = &DirectoryNode> {
        self.children.iter().filter_map(Entry::as_folder)
    }

    /// Child files in original order.
    pub fn files(&self) -> impl Iterator<Item = &FileNode> {
        self.children.iter().filter_map(Entry::as_file)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.children.iter().position(|entry| entry.name() == name)
    }

    /// Get or create the child folder `name`.
    ///
    /// Returns `None` when a file already owns the name.
    pub(crate) fn ensure_folder(&mut self, name: &str) -> Option<&mut DirectoryNode> {
        let idx = match self.position(name) {
            Some(idx) => idx,
            None => {
                self.children.push(Entry::Folder(DirectoryNode::new(name)));
                self.children.len() - 1
            }
        };

        match &mut self.children[idx] {
            Entry::Folder(dir) => Some(dir),
            Entry::File(_) => None,
        }
    }

    /// Place a file, replacing the item of a same-named file in place.
    pub(crate) fn place_file(&mut self, file: FileNode) -> Placement {
        match self.position(&file.name) {
            None => {
                self.children.push(Entry::File(file));
                Placement::Inserted
            }
            Some(idx) => match &mut self.children[idx] {
                Entry::File(existing) => {
                    existing.item = file.item;
                    Placement::Replaced
                }
                Entry::Folder(_) => Placement::Blocked,
            },
        }
    }
}

/// A name is reachable by a path only if it is exactly one segment.
fn is_addressable(name: &str) -> bool {
    !name.is_empty() && !name.contains('/')
}
