//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`DirectoryNode`], [`Entry`], [`FileNode`] - Immutable library tree
//! - [`FileItem`] - Opaque per-file payload for the preview renderer
//! - [`Manifest`] - Flat, path-tagged library description
//! - [`PreviewState`], [`LevelState`], [`SizeMode`] - Per-level view state
//! - [`BrowseRoute`] - Hash-based navigation

mod directory;
mod item;
mod manifest;
mod preview;
mod route;

pub(crate) use directory::Placement;
pub use directory::{DirectoryNode, Entry, FileNode};
pub use item::FileItem;
pub use manifest::{DirectoryEntry, FileEntry, Manifest};
pub use preview::{LevelState, PreviewState, SizeMode};
pub use route::BrowseRoute;
