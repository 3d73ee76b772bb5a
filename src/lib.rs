//! # undoc
//!
//! Multimodal document ingestion for retrieval pipelines.
//!
//! This library converts heterogeneous inputs (PDF, PPT/PPTX, images,
//! plain text) into uniform text [`Document`]s with metadata, ready for
//! downstream embedding and indexing. The core is the PDF page
//! segmentation: splitting a page into coherent text blocks, tables, and
//! images, associating each visual element with its surrounding caption
//! text, and keeping text claimed by table regions from being counted
//! twice.
//!
//! The page-layout engine, the vision/chart/narration services, and the
//! embedding/vector-store stage are external collaborators consumed
//! through narrow traits; the pipeline is assembled by injecting them into
//! the [`Pipeline`] builder.
//!
//! ## Quick Start
//!
//! ```no_run
//! use undoc::Pipeline;
//! # use undoc::{ChartService, NarrationService, VisionService};
//! # use std::sync::Arc;
//! # struct Svc;
//! # impl VisionService for Svc {
//! #     fn describe(&self, _image: &[u8]) -> undoc::Result<String> { Ok(String::new()) }
//! # }
//! # impl ChartService for Svc {
//! #     fn deplot(&self, _image: &[u8]) -> undoc::Result<String> { Ok(String::new()) }
//! # }
//! # impl NarrationService for Svc {
//! #     fn narrate(&self, _table_text: &str) -> undoc::Result<String> { Ok(String::new()) }
//! # }
//!
//! fn main() -> undoc::Result<()> {
//!     let pipeline = Pipeline::builder()
//!         .vision(Arc::new(Svc))
//!         .chart(Arc::new(Svc))
//!         .narration(Arc::new(Svc))
//!         .artifact_root("./vectorstore")
//!         .build()?;
//!
//!     let documents = pipeline.load_dir("./data")?;
//!     for doc in &documents {
//!         println!("{} [{:?}]", doc.id, doc.metadata.doc_type);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Uniform output**: every input becomes text-plus-metadata documents
//! - **Caption synthesis**: tables and images are captioned from nearby
//!   text plus a generated visual description
//! - **Failure isolation**: a corrupt file, page, table, or image is
//!   logged and skipped, never aborting the batch
//! - **Parallel batches**: independent files can fan out across workers
//!   with run-scoped artifact paths

pub mod config;
pub mod detect;
pub mod error;
pub mod loader;
pub mod model;
pub mod segment;
pub mod services;
pub mod source;
pub mod store;

// Re-export commonly used types
pub use config::PipelineConfig;
pub use detect::FileKind;
pub use error::{Error, Result};
pub use loader::{
    DocumentLoader, ImageLoader, LoaderContext, LoaderRegistry, PdfLoader, SlideLoader,
    TextLoader,
};
pub use model::{
    BlockKind, BoundingBox, DocMetadata, Document, DocumentType, PageBlock, TableData, TextGroup,
};
pub use segment::{group_text_blocks, text_around, PageSegmenter, SegmentOptions};
pub use services::{
    Captioner, ChartService, EmbeddingService, Indexer, NarrationService, VectorStore,
    VisionService,
};
pub use source::{
    PageImage, PageSourceReader, PagedSource, Slide, SlideReader, SlideSource, SourcePage,
    TableRegion,
};
pub use store::{ArtifactStore, LocalArtifactStore};

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// An assembled ingestion pipeline.
///
/// Holds a loader registry wired with the injected services and readers.
/// Construct with [`Pipeline::builder`].
pub struct Pipeline {
    registry: LoaderRegistry,
    config: PipelineConfig,
}

impl Pipeline {
    /// Start building a pipeline.
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// The underlying loader registry.
    pub fn registry(&self) -> &LoaderRegistry {
        &self.registry
    }

    /// The pipeline configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Load one file.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Document>> {
        self.registry.load(path.as_ref())
    }

    /// Load documents from bytes, dispatching on the given extension.
    pub fn load_bytes(&self, bytes: &[u8], ext: &str, name: &str) -> Result<Vec<Document>> {
        self.registry.load_bytes(bytes, ext, name)
    }

    /// Load a batch of files, skipping unsupported and failing ones.
    pub fn load_batch(&self, paths: &[PathBuf]) -> Vec<Document> {
        self.registry.load_batch(paths, self.config.parallel)
    }

    /// Load every file in a directory.
    pub fn load_dir<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<Document>> {
        self.registry.load_dir(dir.as_ref(), self.config.parallel)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Pipeline`].
///
/// The vision, chart, and narration services are required; the PDF and
/// slide loaders are registered only when their readers are supplied.
pub struct PipelineBuilder {
    vision: Option<Arc<dyn VisionService>>,
    chart: Option<Arc<dyn ChartService>>,
    narration: Option<Arc<dyn NarrationService>>,
    page_reader: Option<Arc<dyn PageSourceReader>>,
    slide_reader: Option<Arc<dyn SlideReader>>,
    store: Option<Arc<dyn ArtifactStore>>,
    artifact_root: PathBuf,
    options: SegmentOptions,
    config: PipelineConfig,
}

impl PipelineBuilder {
    fn new() -> Self {
        Self {
            vision: None,
            chart: None,
            narration: None,
            page_reader: None,
            slide_reader: None,
            store: None,
            artifact_root: PathBuf::from("vectorstore"),
            options: SegmentOptions::default(),
            config: PipelineConfig::default(),
        }
    }

    /// Set the vision description service.
    pub fn vision(mut self, service: Arc<dyn VisionService>) -> Self {
        self.vision = Some(service);
        self
    }

    /// Set the chart-to-table service.
    pub fn chart(mut self, service: Arc<dyn ChartService>) -> Self {
        self.chart = Some(service);
        self
    }

    /// Set the narration service.
    pub fn narration(mut self, service: Arc<dyn NarrationService>) -> Self {
        self.narration = Some(service);
        self
    }

    /// Set the paged-source reader, enabling the PDF loader.
    pub fn page_reader(mut self, reader: Arc<dyn PageSourceReader>) -> Self {
        self.page_reader = Some(reader);
        self
    }

    /// Set the slide-deck reader, enabling the PPT/PPTX loader.
    pub fn slide_reader(mut self, reader: Arc<dyn SlideReader>) -> Self {
        self.slide_reader = Some(reader);
        self
    }

    /// Use a custom artifact store instead of the run-scoped local one.
    pub fn artifact_store(mut self, store: Arc<dyn ArtifactStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Root directory for the default run-scoped artifact store.
    pub fn artifact_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.artifact_root = root.into();
        self
    }

    /// Set segmentation options.
    pub fn options(mut self, options: SegmentOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the pipeline configuration.
    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Assemble the pipeline.
    ///
    /// Fails when any of the three caption services is missing.
    pub fn build(self) -> Result<Pipeline> {
        let vision = self
            .vision
            .ok_or_else(|| Error::Other("pipeline requires a vision service".into()))?;
        let chart = self
            .chart
            .ok_or_else(|| Error::Other("pipeline requires a chart service".into()))?;
        let narration = self
            .narration
            .ok_or_else(|| Error::Other("pipeline requires a narration service".into()))?;

        let store = self
            .store
            .unwrap_or_else(|| Arc::new(LocalArtifactStore::with_run_id(self.artifact_root)));

        let ctx = LoaderContext {
            captioner: Captioner::new(vision, chart, narration),
            store,
            options: self.options,
        };

        let mut registry = LoaderRegistry::new();
        registry.register(Arc::new(TextLoader::new()));
        registry.register(Arc::new(ImageLoader::new(ctx.clone())));
        if let Some(reader) = self.page_reader {
            registry.register(Arc::new(PdfLoader::new(reader, ctx.clone())));
        }
        if let Some(reader) = self.slide_reader {
            registry.register(Arc::new(SlideLoader::new(reader, ctx)));
        }

        Ok(Pipeline {
            registry,
            config: self.config,
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
