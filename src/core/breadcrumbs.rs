//! Breadcrumb trail derived from a path string.

use crate::utils::format::path_segments;

/// One crumb of the trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breadcrumb {
    /// Segment label
    pub label: String,
    /// Path up to and including this segment
    pub target_path: String,
    /// Last crumb: the level being shown
    pub is_current: bool,
}

impl Breadcrumb {
    /// Navigation target. The current crumb has none.
    pub fn link(&self) -> Option<&str> {
        (!self.is_current).then_some(self.target_path.as_str())
    }
}

/// Build the breadcrumb trail for `path`.
///
/// Depends only on the string, so it works for paths that do not resolve.
/// The root path yields an empty trail.
pub fn build(path: &str) -> Vec<Breadcrumb> {
    let tokens: Vec<&str> = path_segments(path).collect();
    let last = tokens.len().saturating_sub(1);

    tokens
        .iter()
        .enumerate()
        .map(|(idx, token)| Breadcrumb {
            label: token.to_string(),
            target_path: tokens[..=idx].join("/"),
            is_current: idx == last,
        })
        .collect()
}
