//! Hash-based routing for the browser host.
//!
//! URL format: `#/path/to/folder` (e.g., `#/Reports/2024`). The empty hash and
//! `#/` both address the library root. Segments are percent-encoded in the
//! hash (`#/My%20Docs`) and decoded in [`BrowseRoute::path`].

use crate::utils::dom;
use crate::utils::format::normalize_path;
use crate::utils::url::{decode_path, encode_path};

/// Route of the browser view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowseRoute {
    /// Normalized library path (`""` for root)
    pub path: String,
}

impl BrowseRoute {
    pub fn new(path: &str) -> Self {
        Self {
            path: normalize_path(path),
        }
    }

    /// Parse URL hash into a route
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        Self {
            path: decode_path(path),
        }
    }

    /// Convert the route to a URL hash
    pub fn to_hash(&self) -> String {
        format!("#/{}", encode_path(&self.path))
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }
}
