//! UI components built with Leptos.
//!
//! - [`browser`] - Library browser (breadcrumbs, filter, grid, preview)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod browser;
pub mod icons;
