//! External service contracts and caption synthesis.
//!
//! Vision description, chart deplotting, and narration are blocking network
//! services injected at pipeline construction. The [`Captioner`] composes
//! them into the three operations the extractors need: direct description,
//! graph classification, and graph-to-text narration.

mod index;

pub use index::{EmbeddingService, Indexer, VectorStore};

use crate::error::Result;
use std::sync::Arc;

/// Keywords that mark a vision description as a chart-like visual.
pub const GRAPH_KEYWORDS: [&str; 4] = ["graph", "plot", "chart", "table"];

/// Natural-language image description service.
pub trait VisionService: Send + Sync {
    /// Describe the image in plain language.
    fn describe(&self, image: &[u8]) -> Result<String>;
}

/// Chart-to-table service: linearizes a chart image into table text.
pub trait ChartService: Send + Sync {
    /// Produce the linearized underlying data table of a chart image.
    fn deplot(&self, image: &[u8]) -> Result<String>;
}

/// Narration service: explains a linearized table in plain English.
pub trait NarrationService: Send + Sync {
    /// Turn linearized table text into prose.
    fn narrate(&self, table_text: &str) -> Result<String>;
}

/// Composes the vision, chart, and narration services for caption synthesis.
#[derive(Clone)]
pub struct Captioner {
    vision: Arc<dyn VisionService>,
    chart: Arc<dyn ChartService>,
    narration: Arc<dyn NarrationService>,
}

impl Captioner {
    /// Create a captioner over the three services.
    pub fn new(
        vision: Arc<dyn VisionService>,
        chart: Arc<dyn ChartService>,
        narration: Arc<dyn NarrationService>,
    ) -> Self {
        Self {
            vision,
            chart,
            narration,
        }
    }

    /// Describe an image in plain language.
    pub fn describe_image(&self, image: &[u8]) -> Result<String> {
        self.vision.describe(image)
    }

    /// Classify an image as a chart-like visual.
    ///
    /// The image is described by the vision service and flagged as a graph
    /// when the lowercased description contains any of [`GRAPH_KEYWORDS`].
    pub fn is_graph(&self, image: &[u8]) -> Result<bool> {
        let description = self.vision.describe(image)?;
        Ok(description_is_graph(&description))
    }

    /// Produce a prose description of a chart image: deplot the image into
    /// a linearized table, then narrate that table.
    pub fn process_graph(&self, image: &[u8]) -> Result<String> {
        let table_text = self.chart.deplot(image)?;
        self.narration.narrate(&table_text)
    }
}

/// Keyword test on a vision description.
pub fn description_is_graph(description: &str) -> bool {
    let lower = description.to_lowercase();
    GRAPH_KEYWORDS.iter().any(|kw| lower.contains(kw))
}
