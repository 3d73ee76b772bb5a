//! Pipeline configuration.
//!
//! Downstream model settings travel as an explicit value handed to the
//! pipeline at construction, not as process-wide state.

/// Configuration for an ingestion pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Embedding model identifier handed to the downstream indexing stage
    pub embedding_model: String,

    /// LLM identifier used by the narration service
    pub llm_model: String,

    /// Target chunk size for the downstream splitter, in characters
    pub chunk_size: usize,

    /// Process batch files in parallel (each file is independent; artifact
    /// paths are run-scoped so workers never collide)
    pub parallel: bool,
}

impl PipelineConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the embedding model identifier.
    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = model.into();
        self
    }

    /// Set the LLM identifier.
    pub fn with_llm_model(mut self, model: impl Into<String>) -> Self {
        self.llm_model = model.into();
        self
    }

    /// Set the downstream splitter chunk size.
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size;
        self
    }

    /// Enable or disable parallel batch processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel batch processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            embedding_model: "nvidia/nv-embedqa-e5-v5".to_string(),
            llm_model: "mistralai/mixtral-8x7b-instruct-v0.1".to_string(),
            chunk_size: 600,
            parallel: false,
        }
    }
}
