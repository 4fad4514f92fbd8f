//! Preview renderer boundary.
//!
//! The navigation core never renders file contents itself. It hands a
//! [`FileItem`] and a [`SizeMode`] to a [`PreviewRenderer`] and places the
//! output on a file tile (small) or in the preview overlay (large).

use crate::models::{FileItem, SizeMode};
use crate::utils::format::{format_date_iso, format_megabytes};

/// External capability that turns an item into displayable content.
pub trait PreviewRenderer {
    type Output;

    fn render(&self, item: &FileItem, mode: SizeMode) -> Self::Output;
}

// =============================================================================
// File Kind
// =============================================================================

/// Broad content category used to pick icons and preview layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Document,
    Pdf,
    Image,
    Text,
    Unknown,
}

impl FileKind {
    /// Detect the kind from the MIME type, falling back to the extension.
    pub fn detect(item: &FileItem) -> Self {
        if let Some(kind) = item.content_type.as_deref().and_then(Self::from_mime) {
            return kind;
        }
        match item.extension().as_deref() {
            Some("md" | "markdown" | "doc" | "docx" | "odt") => Self::Document,
            Some("pdf") => Self::Pdf,
            Some("png" | "jpg" | "jpeg" | "gif" | "webp" | "svg") => Self::Image,
            Some("txt" | "csv" | "json" | "log") => Self::Text,
            _ => Self::Unknown,
        }
    }

    fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            "application/pdf" => Some(Self::Pdf),
            "text/markdown" => Some(Self::Document),
            m if m.starts_with("image/") => Some(Self::Image),
            m if m.starts_with("text/") => Some(Self::Text),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::Pdf => "PDF",
            Self::Image => "Image",
            Self::Text => "Text",
            Self::Unknown => "File",
        }
    }
}

// =============================================================================
// Renderers
// =============================================================================

/// Plain-text renderer used by the command-line host.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextPreview;

impl PreviewRenderer for TextPreview {
    type Output = String;

    fn render(&self, item: &FileItem, mode: SizeMode) -> String {
        let kind = FileKind::detect(item);
        match mode {
            SizeMode::Small => format!("[{}]", kind.label()),
            SizeMode::Large => PreviewCard::from_item(item)
                .details
                .iter()
                .map(|(label, value)| format!("{:>10}: {}", label, value))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Structured preview consumed by the web components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewCard {
    /// Display title (item title, or the file name)
    pub title: String,
    pub kind: FileKind,
    pub mode: SizeMode,
    /// Label/value rows, empty for thumbnails
    pub details: Vec<(&'static str, String)>,
}

impl PreviewCard {
    fn from_item(item: &FileItem) -> Self {
        let kind = FileKind::detect(item);
        let mut details = vec![
            ("Name", item.file_name().to_string()),
            ("Path", item.path.clone()),
            ("Type", kind.label().to_string()),
            ("Size", format!("{} MB", format_megabytes(item.size))),
        ];
        if let Some(content_type) = &item.content_type {
            details.push(("MIME", content_type.clone()));
        }
        if let Some(modified) = item.modified {
            details.push(("Modified", format_date_iso(modified)));
        }

        Self {
            title: item
                .title
                .clone()
                .unwrap_or_else(|| item.file_name().to_string()),
            kind,
            mode: SizeMode::Large,
            details,
        }
    }
}

/// Card renderer used by the web components.
#[derive(Clone, Copy, Debug, Default)]
pub struct CardPreview;

impl PreviewRenderer for CardPreview {
    type Output = PreviewCard;

    fn render(&self, item: &FileItem, mode: SizeMode) -> PreviewCard {
        match mode {
            SizeMode::Large => PreviewCard::from_item(item),
            SizeMode::Small => PreviewCard {
                title: item.file_name().to_string(),
                kind: FileKind::detect(item),
                mode,
                details: Vec::new(),
            },
        }
    }
}
