//! Path resolution over the library tree.

use super::error::PathError;
use crate::models::DirectoryNode;
use crate::utils::format::{normalize_path, path_segments};

/// Resolve a slash-delimited path to the folder it names.
///
/// Empty segments are ignored, so `""`, `"/"` and `"a//b/"` are all valid.
/// Fails on the first segment that is missing or names a file. Pure and
/// deterministic for a given `(root, path)` pair.
pub fn resolve<'a>(root: &'a DirectoryNode, path: &str) -> Result<&'a DirectoryNode, PathError> {
    path_segments(path)
        .enumerate()
        .try_fold(root, |node, (depth, segment)| {
            node.resolve(segment)
                .map_err(|source| PathError::new(normalize_path(path), depth, source))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ResolveError;
    use crate::models::{Entry, FileItem, FileNode};

    fn create_test_tree() -> DirectoryNode {
        let c = DirectoryNode::new("c");
        let b = DirectoryNode::with_entries(
            "b",
            [
                Entry::Folder(c),
                Entry::File(FileNode::new("f.txt", FileItem::new("a/b/f.txt", 3))),
            ],
        );
        let a = DirectoryNode::with_entries("a", [Entry::Folder(b)]);
        DirectoryNode::with_entries("root", [Entry::Folder(a)])
    }

    #[test]
    fn test_root_identity() {
        let root = create_test_tree();
        assert!(std::ptr::eq(resolve(&root, "").unwrap(), &root));
        assert!(std::ptr::eq(resolve(&root, "/").unwrap(), &root));
        assert!(std::ptr::eq(resolve(&root, "///").unwrap(), &root));

        let empty = DirectoryNode::default();
        assert!(std::ptr::eq(resolve(&empty, "").unwrap(), &empty));
    }

    #[test]
    fn test_resolve_nested() {
        let root = create_test_tree();
        assert_eq!(resolve(&root, "a/b/c").unwrap().name(), "c");
        assert_eq!(resolve(&root, "/a/b/").unwrap().name(), "b");
        assert_eq!(resolve(&root, "a//b").unwrap().name(), "b");
    }

    #[test]
    fn test_resolve_deterministic() {
        let root = create_test_tree();
        let first = resolve(&root, "a/b").unwrap();
        let second = resolve(&root, "a/b").unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_resolve_not_found() {
        let root = create_test_tree();
        let err = resolve(&root, "a/x/c").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.segment, "x");
        assert_eq!(err.depth, 1);
        assert_eq!(err.path, "a/x/c");
    }

    #[test]
    fn test_resolve_through_file() {
        let root = create_test_tree();
        let err = resolve(&root, "a/b/f.txt/deeper").unwrap_err();
        assert!(err.is_not_a_folder());
        assert_eq!(err.source, ResolveError::NotAFolder("f.txt".to_string()));
        assert_eq!(err.depth, 2);
    }

    #[test]
    fn test_resolve_file_as_last_segment() {
        // A path must name a folder, even at the last hop
        let root = create_test_tree();
        let err = resolve(&root, "a/b/f.txt").unwrap_err();
        assert!(err.is_not_a_folder());
    }
}
