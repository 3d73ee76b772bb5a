//! Input file kind detection.
//!
//! Loader dispatch is keyed on the file extension; unsupported extensions
//! are skipped with a warning rather than treated as errors.

use std::path::Path;

/// Supported input file kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// `.pdf`
    Pdf,
    /// `.ppt`
    Ppt,
    /// `.pptx`
    Pptx,
    /// `.png`
    Png,
    /// `.jpg`
    Jpg,
    /// `.jpeg`
    Jpeg,
    /// `.txt`
    Txt,
}

impl FileKind {
    /// Detect a file kind from an extension (without the leading dot,
    /// case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "ppt" => Some(Self::Ppt),
            "pptx" => Some(Self::Pptx),
            "png" => Some(Self::Png),
            "jpg" => Some(Self::Jpg),
            "jpeg" => Some(Self::Jpeg),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    /// Detect a file kind from a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// The canonical lowercase extension for this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Ppt => "ppt",
            Self::Pptx => "pptx",
            Self::Png => "png",
            Self::Jpg => "jpg",
            Self::Jpeg => "jpeg",
            Self::Txt => "txt",
        }
    }

    /// Whether this kind is a slide deck.
    pub fn is_slides(&self) -> bool {
        matches!(self, Self::Ppt | Self::Pptx)
    }

    /// Whether this kind is a standalone raster image.
    pub fn is_image(&self) -> bool {
        matches!(self, Self::Png | Self::Jpg | Self::Jpeg)
    }
}

/// Check whether a path has a supported extension.
pub fn is_supported<P: AsRef<Path>>(path: P) -> bool {
    FileKind::from_path(path).is_some()
}
