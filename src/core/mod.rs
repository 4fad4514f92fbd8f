//! Core navigation and presentation logic.
//!
//! This module provides:
//! - [`resolve`] path resolution and [`breadcrumbs`] derivation
//! - [`partition`] name filtering of one directory
//! - [`Navigator`] per-level filter/preview state and [`LevelView`] rendering
//! - [`PreviewRenderer`] the boundary to the file-content renderer
//! - Library tree construction (`DirectoryNode::from_manifest`)

pub mod breadcrumbs;
pub mod error;
mod filter;
mod library;
mod navigation;
mod preview;
mod resolver;
mod view;

pub use breadcrumbs::Breadcrumb;
pub use error::{ManifestError, PathError, ResolveError};
pub use filter::{matches, partition, Partition};
pub use navigation::Navigator;
pub use preview::{CardPreview, FileKind, PreviewCard, PreviewRenderer, TextPreview};
pub use resolver::resolve;
pub use view::{FileTile, FolderTile, LevelView, Listing, PreviewOverlay, Unresolved};
