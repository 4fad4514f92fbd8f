//! Per-level preview and filter state.

use super::FileItem;

/// Size mode requested from the preview renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizeMode {
    /// Inline thumbnail on a file tile
    #[default]
    Small,
    /// Enlarged preview overlay
    Large,
}

impl SizeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeMode::Small => "small",
            SizeMode::Large => "large",
        }
    }
}

/// Listing / previewing state of one navigation level.
///
/// At most one item is previewed at a time; opening another one replaces it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PreviewState {
    /// Showing the entry grid (default)
    #[default]
    Listing,
    /// Preview overlay open for one file
    Previewing(FileItem),
}

impl PreviewState {
    /// Open `item`, replacing whatever was previewed before.
    pub fn replace(&mut self, item: FileItem) {
        *self = PreviewState::Previewing(item);
    }

    /// Back to listing. No-op when nothing is open.
    pub fn close(&mut self) {
        *self = PreviewState::Listing;
    }

    pub fn item(&self) -> Option<&FileItem> {
        match self {
            PreviewState::Previewing(item) => Some(item),
            PreviewState::Listing => None,
        }
    }
}

/// Transient state owned by a single navigation level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelState {
    filter: Option<String>,
    preview: PreviewState,
}

impl LevelState {
    /// Current filter query, if any.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Set the filter. An empty query clears it.
    pub fn set_filter(&mut self, query: impl Into<String>) {
        let query = query.into();
        self.filter = (!query.is_empty()).then_some(query);
    }

    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    pub fn preview_mut(&mut self) -> &mut PreviewState {
        &mut self.preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_replace_is_exclusive() {
        let mut state = PreviewState::default();
        state.replace(FileItem::new("a.txt", 1));
        state.replace(FileItem::new("b.txt", 2));
        assert_eq!(state, PreviewState::Previewing(FileItem::new("b.txt", 2)));
    }

    #[test]
    fn test_preview_close_idempotent() {
        let mut state = PreviewState::Previewing(FileItem::new("a.txt", 1));
        state.close();
        assert_eq!(state, PreviewState::Listing);
        state.close();
        assert_eq!(state, PreviewState::Listing);
        assert!(state.item().is_none());
    }

    #[test]
    fn test_empty_filter_clears() {
        let mut level = LevelState::default();
        level.set_filter("rep");
        assert_eq!(level.filter(), Some("rep"));
        level.set_filter("");
        assert_eq!(level.filter(), None);
    }

    #[test]
    fn test_filter_does_not_touch_preview() {
        let mut level = LevelState::default();
        level.preview_mut().replace(FileItem::new("a.txt", 1));
        level.set_filter("zzz");
        assert!(level.preview().item().is_some());
    }

    #[test]
    fn test_size_mode_str() {
        assert_eq!(SizeMode::Small.as_str(), "small");
        assert_eq!(SizeMode::Large.as_str(), "large");
    }
}
