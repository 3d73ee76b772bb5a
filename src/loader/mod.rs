//! Document loaders and extension-based dispatch.
//!
//! One loader per supported file kind, selected through a registry keyed
//! on lowercase file extension. Batch loading is failure-isolated: an
//! unsupported or broken file is logged and skipped, never aborting the
//! rest of the batch.

mod image;
mod pdf;
mod slides;
mod text;

pub use image::ImageLoader;
pub use pdf::PdfLoader;
pub use slides::SlideLoader;
pub use text::TextLoader;

use crate::error::{Error, Result};
use crate::model::Document;
use crate::segment::SegmentOptions;
use crate::services::Captioner;
use crate::store::ArtifactStore;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Shared collaborators handed to every loader.
#[derive(Clone)]
pub struct LoaderContext {
    /// Caption synthesis services
    pub captioner: Captioner,
    /// Side-artifact store
    pub store: Arc<dyn ArtifactStore>,
    /// Segmentation tunables
    pub options: SegmentOptions,
}

/// Trait for document loaders.
///
/// Implement this trait to add support for a new input file kind.
pub trait DocumentLoader: Send + Sync {
    /// Supported file extensions, lowercase without the leading dot.
    fn supported_extensions(&self) -> &[&str];

    /// Name of this loader.
    fn name(&self) -> &str;

    /// Load documents from raw bytes. `name` is the original filename,
    /// used to derive source identifiers.
    fn load_bytes(&self, bytes: &[u8], name: &str) -> Result<Vec<Document>>;

    /// Load documents from a file on disk.
    fn load(&self, path: &Path) -> Result<Vec<Document>> {
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("input");
        self.load_bytes(&bytes, name)
    }
}

/// Filename without its extension, for source identifiers.
pub(crate) fn file_stem(name: &str) -> String {
    Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name)
        .to_string()
}

/// Registry mapping file extensions to loaders.
pub struct LoaderRegistry {
    loaders: HashMap<String, Arc<dyn DocumentLoader>>,
    by_name: HashMap<String, Arc<dyn DocumentLoader>>,
}

impl LoaderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            loaders: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Register a loader for all its supported extensions.
    pub fn register(&mut self, loader: Arc<dyn DocumentLoader>) {
        for ext in loader.supported_extensions() {
            self.loaders.insert(ext.to_lowercase(), loader.clone());
        }
        self.by_name.insert(loader.name().to_lowercase(), loader);
    }

    /// Get a loader by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentLoader>> {
        self.loaders.get(&ext.to_lowercase()).cloned()
    }

    /// Get a loader by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentLoader>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.loaders.contains_key(&ext.to_lowercase())
    }

    /// All supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.loaders.keys().map(|s| s.as_str()).collect()
    }

    /// Load one file through the loader registered for its extension.
    pub fn load(&self, path: &Path) -> Result<Vec<Document>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedInput(format!("{}: no extension", path.display())))?;

        let loader = self.get_by_extension(ext).ok_or_else(|| {
            Error::UnsupportedInput(format!("no loader for extension: {ext}"))
        })?;

        loader.load(path)
    }

    /// Load bytes through the loader registered for the given extension.
    pub fn load_bytes(&self, bytes: &[u8], ext: &str, name: &str) -> Result<Vec<Document>> {
        let loader = self.get_by_extension(ext).ok_or_else(|| {
            Error::UnsupportedInput(format!("no loader for extension: {ext}"))
        })?;

        loader.load_bytes(bytes, name)
    }

    /// Load a batch of files, skipping unsupported and failing ones.
    ///
    /// Each file is processed independently; with `parallel` set the batch
    /// fans out across rayon workers (artifact names carry the source file
    /// stem, so workers never write the same path). Output order follows
    /// input order either way.
    pub fn load_batch(&self, paths: &[PathBuf], parallel: bool) -> Vec<Document> {
        let load_one = |path: &PathBuf| -> Vec<Document> {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if !self.supports(ext) {
                log::warn!("unsupported file type: {}", path.display());
                return Vec::new();
            }
            match self.load(path) {
                Ok(docs) => docs,
                Err(e) => {
                    log::error!("error processing {}: {e}", path.display());
                    Vec::new()
                }
            }
        };

        let per_file: Vec<Vec<Document>> = if parallel {
            paths.par_iter().map(load_one).collect()
        } else {
            paths.iter().map(load_one).collect()
        };

        per_file.into_iter().flatten().collect()
    }

    /// Load every regular file in a directory (non-recursive, sorted by
    /// filename).
    pub fn load_dir(&self, dir: &Path, parallel: bool) -> Result<Vec<Document>> {
        let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|p| p.is_file())
            .collect();
        paths.sort();

        Ok(self.load_batch(&paths, parallel))
    }
}

impl Default for LoaderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
