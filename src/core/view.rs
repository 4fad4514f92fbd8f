//! Render model of one navigation level.
//!
//! Everything here is display data derived from the tree and the level's
//! state; hosts (the web components, the CLI) only lay it out.

use super::breadcrumbs::Breadcrumb;
use super::error::PathError;

/// What a level shows.
#[derive(Clone, Debug, PartialEq)]
pub enum LevelView<T> {
    /// Path resolved: entry grid, optionally with the preview overlay
    Listing(Listing<T>),
    /// Path did not resolve: error state with a way back
    Unresolved(Unresolved),
}

impl<T> LevelView<T> {
    pub fn as_listing(&self) -> Option<&Listing<T>> {
        match self {
            LevelView::Listing(listing) => Some(listing),
            LevelView::Unresolved(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Listing<T> {
    /// Folder name shown as the heading
    pub name: String,
    /// Normalized path of the level
    pub path: String,
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Unfiltered child count, e.g. "4 items"
    pub item_count: String,
    /// Active filter query
    pub filter: Option<String>,
    pub folders: Vec<FolderTile>,
    pub files: Vec<FileTile<T>>,
    /// Present only while previewing
    pub preview: Option<PreviewOverlay<T>>,
}

impl<T> Listing<T> {
    /// The filter is set and nothing matched.
    pub fn no_matches(&self) -> bool {
        self.filter.is_some() && self.folders.is_empty() && self.files.is_empty()
    }
}

/// A navigable folder entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FolderTile {
    pub name: String,
    /// Name cut to the folder budget
    pub label: String,
    /// Path the folder link leads to
    pub target_path: String,
    /// Child count, e.g. "1 item"
    pub item_count: String,
}

/// A selectable file entry.
#[derive(Clone, Debug, PartialEq)]
pub struct FileTile<T> {
    pub name: String,
    /// Name cut to the file budget
    pub label: String,
    /// Size in megabytes, e.g. "3.000"
    pub size_mb: String,
    /// Renderer output in small mode
    pub thumbnail: T,
}

/// The open preview.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewOverlay<T> {
    pub title: String,
    /// Name of the previewed file
    pub name: String,
    /// Renderer output in large mode
    pub content: T,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Unresolved {
    pub path: String,
    pub breadcrumbs: Vec<Breadcrumb>,
    /// User-facing message
    pub message: String,
    /// Underlying error, for diagnostics
    pub error: PathError,
}
