//! Recursive library browser.
//!
//! Presents a folder tree one level at a time: breadcrumbs, a per-level name
//! filter, a grid of folders and files, and a single-file preview overlay.
//!
//! - [`models`] - Tree, manifest, per-level state
//! - [`core`] - Path resolution, filtering, navigation, render model
//! - [`components`] - Leptos UI over the render model
//! - [`utils`] - Formatting and DOM helpers

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::App;
