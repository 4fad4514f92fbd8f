//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The demo library manifest is loaded at compile time using `include_str!`.

// =============================================================================
// Assets (loaded at compile time)
// =============================================================================

/// Library manifest rendered by the web app.
pub const LIBRARY_MANIFEST: &str = include_str!("../assets/library.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the page header.
pub const APP_NAME: &str = "folio";

/// Label of the synthetic root folder.
pub const ROOT_LABEL: &str = "Library";

// =============================================================================
// Display Configuration
// =============================================================================

/// Display truncation limits.
pub mod display {
    /// Character budget for folder names on folder tiles.
    pub const FOLDER_NAME_BUDGET: usize = 28;
    /// Character budget for file names on file tiles.
    pub const FILE_NAME_BUDGET: usize = 20;
    /// Marker appended to truncated names.
    pub const ELLIPSIS: &str = "...";
    /// Noun used for entry count labels.
    pub const ITEM_NOUN: &str = "item";
}

/// Size formatting.
pub mod size {
    /// Bytes per megabyte (binary).
    pub const BYTES_PER_MEGABYTE: f64 = 1_048_576.0;
    /// Decimal places shown for megabyte values.
    pub const MEGABYTE_PRECISION: usize = 3;
}

/// User-facing labels.
pub mod labels {
    /// Placeholder of the per-level filter input.
    pub const FILTER_PLACEHOLDER: &str = "Filter by Name";
    /// Title of the preview overlay.
    pub const PREVIEW_TITLE: &str = "Preview";
    /// Message shown when a path cannot be resolved.
    pub const UNRESOLVED_PATH: &str = "Cannot resolve path";
    /// Message shown when a filter matches nothing.
    pub const NO_MATCHES: &str = "No entries match the filter";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
