//! Tabular content extracted from a table region.

use serde::{Deserialize, Serialize};

/// Rows × named columns extracted from a detected table region.
///
/// `header_external` is set by the source when the column names were
/// inferred from outside the ruled grid rather than read from a real header
/// row; such tables are skipped during extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableData {
    /// Column header names
    pub columns: Vec<String>,

    /// Body rows, each the same length as `columns`
    pub rows: Vec<Vec<String>>,

    /// Whether the header was inferred rather than read from the grid
    #[serde(default)]
    pub header_external: bool,
}

impl TableData {
    /// Create table data with a real (non-external) header.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            columns,
            rows,
            header_external: false,
        }
    }

    /// Mark the header as inferred.
    pub fn with_external_header(mut self) -> Self {
        self.header_external = true;
        self
    }

    /// Number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Column names joined for caption fallback (space-separated).
    pub fn header_caption(&self) -> String {
        self.columns.join(" ")
    }

    /// Column names joined for document text (comma-separated).
    pub fn column_list(&self) -> String {
        self.columns.join(", ")
    }
}
