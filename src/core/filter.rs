//! Name filter and folder/file partition of one directory.

use crate::models::{DirectoryNode, Entry, FileNode};

/// Folders and files of a directory, each narrowed by the filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    pub folders: Vec<&'a DirectoryNode>,
    pub files: Vec<&'a FileNode>,
}

/// Case-sensitive substring match. No query (or an empty one) matches all.
pub fn matches(name: &str, query: Option<&str>) -> bool {
    query.is_none_or(|q| name.contains(q))
}

/// Split `node`'s children into folders and files, keeping original order,
/// and keep only the names matching `query`.
pub fn partition<'a>(node: &'a DirectoryNode, query: Option<&str>) -> Partition<'a> {
    let mut out = Partition::default();
    for entry in node.entries() {
        if !matches(entry.name(), query) {
            continue;
        }
        match entry {
            Entry::Folder(dir) => out.folders.push(dir),
            Entry::File(file) => out.files.push(file),
        }
    }
    out
}
