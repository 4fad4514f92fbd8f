//! Builds the immutable library tree from a flat manifest.

use crate::models::{DirectoryNode, FileNode, Manifest, Placement};
use crate::utils::format::path_segments;

impl DirectoryNode {
    /// Create the library tree from a manifest.
    ///
    /// Folders are created for every path prefix on first sight, so child
    /// order follows the manifest: files first, then declared directories.
    /// Conflicting entries are skipped with a warning.
    pub fn from_manifest(root_name: &str, manifest: &Manifest) -> Self {
        let mut root = DirectoryNode::new(root_name);
        let mut placed = 0usize;

        for file in &manifest.files {
            let segments: Vec<&str> = path_segments(&file.path).collect();
            let Some((name, parents)) = segments.split_last() else {
                tracing::warn!(path = %file.path, "manifest file without a name skipped");
                continue;
            };

            let parent = match descend(&mut root, parents) {
                Ok(parent) => parent,
                Err(blocker) => {
                    tracing::warn!(
                        path = %file.path,
                        blocked_by = %blocker,
                        "manifest conflict: path passes through a file"
                    );
                    continue;
                }
            };

            match parent.place_file(FileNode::new(*name, file.to_item())) {
                Placement::Inserted => placed += 1,
                Placement::Replaced => {
                    tracing::warn!(path = %file.path, "duplicate manifest file replaced");
                }
                Placement::Blocked => {
                    tracing::warn!(path = %file.path, "manifest conflict: name taken by a folder");
                }
            }
        }

        for dir in &manifest.directories {
            let segments: Vec<&str> = path_segments(&dir.path).collect();
            if let Err(blocker) = descend(&mut root, &segments) {
                tracing::warn!(
                    path = %dir.path,
                    blocked_by = %blocker,
                    "manifest conflict: directory passes through a file"
                );
            }
        }

        tracing::debug!(
            root = %root.name(),
            files = placed,
            entries = root.len(),
            "library tree built"
        );
        root
    }
}

/// Walk (creating as needed) to the folder at `segments`.
///
/// Returns the segment that is occupied by a file on conflict.
fn descend<'a>(
    node: &'a mut DirectoryNode,
    segments: &[&str],
) -> Result<&'a mut DirectoryNode, String> {
    match segments.split_first() {
        None => Ok(node),
        Some((first, rest)) => {
            let next = node.ensure_folder(first).ok_or_else(|| first.to_string())?;
            descend(next, rest)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DirectoryEntry, Entry, FileEntry};

    fn entry(path: &str, size: u64) -> FileEntry {
        FileEntry {
            path: path.to_string(),
            size,
            title: None,
            content_type: None,
            modified: None,
        }
    }

    fn dir(path: &str) -> DirectoryEntry {
        DirectoryEntry {
            path: path.to_string(),
        }
    }

    fn create_test_tree() -> DirectoryNode {
        let manifest = Manifest {
            files: vec![
                entry("blog/hello.md", 1234),
                entry("blog/rust.md", 2048),
                entry("projects/web/app.md", 10),
                entry("readme.txt", 5),
            ],
            directories: vec![dir("empty"), dir("blog")],
        };
        DirectoryNode::from_manifest("Home", &manifest)
    }

    #[test]
    fn test_from_manifest_structure() {
        let root = create_test_tree();
        assert_eq!(root.name(), "Home");

        let names: Vec<_> = root.entries().iter().map(Entry::name).collect();
        assert_eq!(names, ["blog", "projects", "readme.txt", "empty"]);

        let blog = root.resolve("blog").expect("blog should exist");
        assert_eq!(blog.len(), 2);
        assert_eq!(blog.file("hello.md").map(|f| f.item().size), Ok(1234));
        assert_eq!(blog.file("hello.md").map(|f| f.item().path.as_str()), Ok("blog/hello.md"));
    }

    #[test]
    fn test_nested_paths() {
        let root = create_test_tree();
        let web = root
            .resolve("projects")
            .and_then(|p| p.resolve("web"))
            .expect("projects/web should exist");
        assert!(web.get("app.md").is_some());
    }

    #[test]
    fn test_declared_directory_is_empty_folder() {
        let root = create_test_tree();
        let empty = root.resolve("empty").expect("empty should exist");
        assert!(empty.is_empty());
    }

    #[test]
    fn test_conflicts_are_skipped() {
        let manifest = Manifest {
            files: vec![
                entry("a.txt", 1),
                entry("a.txt/inner.txt", 2),
                entry("docs/x.md", 3),
                entry("docs", 4),
                entry("a.txt", 9),
            ],
            directories: vec![dir("a.txt/sub")],
        };
        let root = DirectoryNode::from_manifest("", &manifest);

        let names: Vec<_> = root.entries().iter().map(Entry::name).collect();
        assert_eq!(names, ["a.txt", "docs"]);
        // Duplicate replaced in place
        assert_eq!(root.file("a.txt").map(|f| f.item().size), Ok(9));
        // Folder wins over later file of the same name
        assert!(root.resolve("docs").is_ok());
    }

    #[test]
    fn test_empty_segments_ignored() {
        let manifest = Manifest {
            files: vec![entry("/x//y.txt", 1), entry("", 2), entry("///", 3)],
            directories: vec![],
        };
        let root = DirectoryNode::from_manifest("", &manifest);
        assert_eq!(root.len(), 1);
        assert!(root.resolve("x").is_ok_and(|x| x.get("y.txt").is_some()));
    }
}
