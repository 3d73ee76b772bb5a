//! Side-artifact storage.
//!
//! Table exports, region snapshots, and slide renders are derived files
//! written for later inspection; they are cached artifacts, not the source
//! of truth, so writes are not transactional.

use crate::error::{Error, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectory for table exports and snapshots.
pub const TABLE_DIR: &str = "table_references";
/// Subdirectory for embedded-image artifacts.
pub const IMAGE_DIR: &str = "image_references";
/// Subdirectory for slide renders.
pub const SLIDE_DIR: &str = "ppt_references";

/// Persists side-artifact bytes under a storage root.
pub trait ArtifactStore: Send + Sync {
    /// Save bytes at a path relative to the store root, creating parent
    /// directories as needed. Returns the absolute path written.
    fn save(&self, bytes: &[u8], rel_path: &str) -> Result<PathBuf>;
}

/// Deterministic artifact file name: `{stem}-{kind}{index}-page{page}.{ext}`.
///
/// The source file stem keeps artifacts from different files in one batch
/// from colliding on a shared store.
pub fn artifact_name(stem: &str, kind: &str, index: usize, page_num: usize, ext: &str) -> String {
    format!("{stem}-{kind}{index}-page{page_num}.{ext}")
}

/// A fresh run identifier from the current UTC time.
///
/// Run identifiers namespace artifact directories so parallel workers
/// processing different files never collide on paths.
pub fn unique_run_id() -> String {
    format!("run-{}", Utc::now().format("%Y%m%dT%H%M%S%.3f"))
}

/// Artifact store backed by the local filesystem.
pub struct LocalArtifactStore {
    root: PathBuf,
}

impl LocalArtifactStore {
    /// Create a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a store under `root` namespaced by a fresh run id.
    pub fn with_run_id(root: impl Into<PathBuf>) -> Self {
        let mut root = root.into();
        root.push(unique_run_id());
        Self { root }
    }

    /// The store root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ArtifactStore for LocalArtifactStore {
    fn save(&self, bytes: &[u8], rel_path: &str) -> Result<PathBuf> {
        let path = self.root.join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Artifact(format!("creating {}: {e}", parent.display())))?;
        }
        fs::write(&path, bytes)
            .map_err(|e| Error::Artifact(format!("writing {}: {e}", path.display())))?;
        Ok(path)
    }
}
