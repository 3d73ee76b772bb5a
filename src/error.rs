//! Error types for the undoc library.

use std::io;
use thiserror::Error;

/// Result type alias for undoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document ingestion.
///
/// Failures are always scoped: a bad source yields an empty document set,
/// a bad table or image is skipped, and one bad file never aborts a batch.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input cannot be opened as its declared type (e.g., corrupt PDF).
    #[error("Failed to open source: {0}")]
    SourceOpen(String),

    /// A single table or image failed to extract.
    #[error("Extraction error: {0}")]
    Extraction(String),

    /// An external service call (vision, chart, narration) failed or
    /// returned an unexpected shape.
    #[error("Service error: {0}")]
    Service(String),

    /// The file extension is not recognized by any registered loader.
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    /// Text content is not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A side-artifact could not be written.
    #[error("Artifact error: {0}")]
    Artifact(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (source has {1} pages)")]
    PageOutOfRange(usize, usize),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Artifact(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::SourceOpen("not a PDF".to_string());
        assert_eq!(err.to_string(), "Failed to open source: not a PDF");

        let err = Error::Extraction("rendering table region: raster backend failed".to_string());
        assert_eq!(
            err.to_string(),
            "Extraction error: rendering table region: raster backend failed"
        );

        let err = Error::PageOutOfRange(10, 5);
        assert_eq!(
            err.to_string(),
            "Page 10 is out of range (source has 5 pages)"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
