//! Library browser UI components.
//!
//! Renders the [`LevelView`](crate::core::LevelView) of the navigator's
//! current level.
//!
//! Components:
//! - [`Browser`] - Main browser view
//! - [`LevelHeader`] - Breadcrumbs, title, item count, and filter input
//! - [`EntryGrid`] - Folder and file tiles
//! - [`PreviewModal`] - Enlarged single-file preview

#[allow(clippy::module_inception)]
mod browser;
mod grid;
mod header;
mod preview;

pub use browser::Browser;
pub use grid::EntryGrid;
pub use header::LevelHeader;
pub use preview::PreviewModal;
