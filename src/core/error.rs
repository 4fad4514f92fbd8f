//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`ResolveError`] - A single lookup inside one directory failed
//! - [`PathError`] - A slash-delimited path could not be resolved
//! - [`ManifestError`] - Loading or parsing a library manifest failed

use thiserror::Error;

use crate::config::labels;

/// Failure to look up one name inside a directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No child with this name
    #[error("no entry named '{0}'")]
    NotFound(String),
    /// The name exists but is a file where a folder was needed
    #[error("'{0}' is a file, not a folder")]
    NotAFolder(String),
    /// The name exists but is a folder where a file was needed
    #[error("'{0}' is a folder, not a file")]
    NotAFile(String),
}

impl ResolveError {
    /// The name that failed to resolve.
    pub fn name(&self) -> &str {
        match self {
            Self::NotFound(name) | Self::NotAFolder(name) | Self::NotAFile(name) => name,
        }
    }
}

/// Failure to resolve a path, with the offending segment and its depth.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot resolve '{path}': segment {depth} ('{segment}'): {source}")]
pub struct PathError {
    /// The full path that was being resolved
    pub path: String,
    /// The first segment that failed
    pub segment: String,
    /// 0-based index of `segment` among the non-empty segments
    pub depth: usize,
    /// What went wrong at that segment
    #[source]
    pub source: ResolveError,
}

impl PathError {
    pub fn new(path: impl Into<String>, depth: usize, source: ResolveError) -> Self {
        Self {
            path: path.into(),
            segment: source.name().to_string(),
            depth,
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.source, ResolveError::NotFound(_))
    }

    pub fn is_not_a_folder(&self) -> bool {
        matches!(self.source, ResolveError::NotAFolder(_))
    }

    /// User-facing message. Every variant reads as an unusable path.
    pub fn display_message(&self) -> String {
        format!("{}: /{}", labels::UNRESOLVED_PATH, self.path)
    }
}

/// Errors while loading a library manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest is not valid JSON or has the wrong shape
    #[error("invalid manifest: {0}")]
    Json(#[from] serde_json::Error),
    /// The manifest file could not be read
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),
}
