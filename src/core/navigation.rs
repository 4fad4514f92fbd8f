//! Navigation state across nested folder levels.
//!
//! Each path level behaves like its own view instance with its own filter
//! and preview. Instead of tying that state to component lifetimes, it lives
//! in an arena keyed by level path:
//!
//! - levels on the way to the current path stay mounted and keep their state
//! - navigating elsewhere unmounts the other levels and drops their state
//! - the tree itself is shared and never mutated

use std::collections::HashMap;
use std::sync::Arc;

use super::breadcrumbs;
use super::error::PathError;
use super::filter;
use super::preview::PreviewRenderer;
use super::resolver;
use super::view::{FileTile, FolderTile, LevelView, Listing, PreviewOverlay, Unresolved};
use crate::config::{display, labels};
use crate::models::{DirectoryNode, FileItem, LevelState, SizeMode};
use crate::utils::format::{
    format_megabytes, is_ancestor_or_self, join_path, normalize_path, path_segments, pluralize,
    truncate_name,
};

/// Browsing session over one immutable library tree.
#[derive(Clone, Debug)]
pub struct Navigator {
    tree: Arc<DirectoryNode>,
    path: String,
    levels: HashMap<String, LevelState>,
}

impl Navigator {
    /// Start a session at `path`.
    pub fn new(tree: impl Into<Arc<DirectoryNode>>, path: &str) -> Self {
        Self {
            tree: tree.into(),
            path: normalize_path(path),
            levels: HashMap::new(),
        }
    }

    /// Current normalized path (`""` for the root).
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Resolve the current path against the tree.
    pub fn resolve_current(&self) -> Result<&DirectoryNode, PathError> {
        resolver::resolve(&self.tree, &self.path)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move to `path` (host-driven).
    ///
    /// Levels that are not ancestors of the new path are unmounted and lose
    /// their state. Navigating to the current path is a no-op.
    pub fn navigate(&mut self, path: &str) {
        let path = normalize_path(path);
        if path == self.path {
            return;
        }

        let before = self.levels.len();
        self.levels
            .retain(|level, _| is_ancestor_or_self(level, &path));
        tracing::debug!(
            from = %self.path,
            to = %path,
            dropped = before - self.levels.len(),
            "navigate"
        );
        self.path = path;
    }

    /// Follow a folder link of the current level.
    ///
    /// Returns the new path, `currentPath + "/" + name`.
    pub fn open_folder(&mut self, name: &str) -> Result<String, PathError> {
        let target = join_path(&self.path, name);
        let depth = path_segments(&self.path).count();

        if let Err(source) = self.resolve_current()?.resolve(name) {
            return Err(PathError::new(target, depth, source));
        }

        self.navigate(&target);
        Ok(target)
    }

    // =========================================================================
    // Level State
    // =========================================================================

    /// State of the current level, if it was ever touched.
    pub fn level(&self) -> Option<&LevelState> {
        self.levels.get(&self.path)
    }

    /// State of a mounted level by path.
    pub fn level_at(&self, path: &str) -> Option<&LevelState> {
        self.levels.get(&normalize_path(path))
    }

    fn level_mut(&mut self) -> &mut LevelState {
        self.levels.entry(self.path.clone()).or_default()
    }

    pub fn filter(&self) -> Option<&str> {
        self.level().and_then(LevelState::filter)
    }

    /// Set the current level's filter. Empty text clears it.
    pub fn set_filter(&mut self, query: &str) {
        tracing::debug!(path = %self.path, query, "filter");
        self.level_mut().set_filter(query);
    }

    pub fn preview(&self) -> Option<&FileItem> {
        self.level().and_then(|level| level.preview().item())
    }

    /// Open the preview for a file of the current level, replacing any open
    /// preview.
    pub fn select_file(&mut self, name: &str) -> Result<&FileItem, PathError> {
        let node = resolver::resolve(&self.tree, &self.path)?;
        let file = node.file(name).map_err(|source| {
            PathError::new(
                join_path(&self.path, name),
                path_segments(&self.path).count(),
                source,
            )
        })?;

        self.levels
            .entry(self.path.clone())
            .or_default()
            .preview_mut()
            .replace(file.item().clone());
        tracing::debug!(path = %self.path, file = name, "preview opened");
        Ok(file.item())
    }

    /// Close the current level's preview. No-op when none is open.
    pub fn close_preview(&mut self) {
        if let Some(level) = self.levels.get_mut(&self.path) {
            level.preview_mut().close();
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Build the render model of the current level.
    pub fn view<R: PreviewRenderer>(&self, renderer: &R) -> LevelView<R::Output> {
        let crumbs = breadcrumbs::build(&self.path);

        let node = match self.resolve_current() {
            Ok(node) => node,
            Err(error) => {
                tracing::warn!(path = %self.path, %error, "level did not resolve");
                return LevelView::Unresolved(Unresolved {
                    path: self.path.clone(),
                    breadcrumbs: crumbs,
                    message: error.display_message(),
                    error,
                });
            }
        };

        let query = self.filter();
        let parts = filter::partition(node, query);

        let folders = parts
            .folders
            .iter()
            .map(|dir| FolderTile {
                name: dir.name().to_string(),
                label: truncate_name(dir.name(), display::FOLDER_NAME_BUDGET),
                target_path: join_path(&self.path, dir.name()),
                item_count: pluralize(dir.len(), display::ITEM_NOUN),
            })
            .collect();

        let files = parts
            .files
            .iter()
            .map(|file| FileTile {
                name: file.name().to_string(),
                label: truncate_name(file.name(), display::FILE_NAME_BUDGET),
                size_mb: format_megabytes(file.item().size),
                thumbnail: renderer.render(file.item(), SizeMode::Small),
            })
            .collect();

        let preview = self.preview().map(|item| PreviewOverlay {
            title: labels::PREVIEW_TITLE.to_string(),
            name: item.file_name().to_string(),
            content: renderer.render(item, SizeMode::Large),
        });

        LevelView::Listing(Listing {
            name: node.name().to_string(),
            path: self.path.clone(),
            breadcrumbs: crumbs,
            item_count: pluralize(node.len(), display::ITEM_NOUN),
            filter: query.map(str::to_string),
            folders,
            files,
            preview,
        })
    }
}
