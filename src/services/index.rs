//! Downstream embedding and vector-store contracts.
//!
//! The pipeline produces [`Document`] values; how they are embedded and
//! indexed is up to the caller. These traits pin the narrow interface the
//! ingestion side assumes, nothing more.

use crate::error::Result;
use crate::model::Document;
use std::sync::Arc;

/// Text embedding service.
pub trait EmbeddingService: Send + Sync {
    /// Embed one text into a vector.
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Identifier of the embedding model.
    fn model_name(&self) -> &str;
}

/// Vector store holding embedded documents.
pub trait VectorStore: Send + Sync {
    /// Add documents with their embeddings, keyed by document id.
    fn add(&self, documents: &[Document], embeddings: &[Vec<f32>]) -> Result<()>;

    /// Return the `k` documents nearest to the query vector.
    fn query(&self, query: &[f32], k: usize) -> Result<Vec<Document>>;
}

/// Embeds document batches and hands them to a vector store.
pub struct Indexer {
    embedding: Arc<dyn EmbeddingService>,
    store: Arc<dyn VectorStore>,
}

impl Indexer {
    /// Create an indexer over an embedding service and a vector store.
    pub fn new(embedding: Arc<dyn EmbeddingService>, store: Arc<dyn VectorStore>) -> Self {
        Self { embedding, store }
    }

    /// Embed every document in order and add the batch to the store.
    pub fn index(&self, documents: &[Document]) -> Result<()> {
        let mut embeddings = Vec::with_capacity(documents.len());
        for doc in documents {
            embeddings.push(self.embedding.embed(&doc.text)?);
        }
        self.store.add(documents, &embeddings)
    }

    /// Embed a query text and return the `k` nearest documents.
    pub fn query(&self, text: &str, k: usize) -> Result<Vec<Document>> {
        let vector = self.embedding.embed(text)?;
        self.store.query(&vector, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocMetadata;
    use std::sync::Mutex;

    struct LengthEmbedding;

    impl EmbeddingService for LengthEmbedding {
        fn embed(&self, text: &str) -> Result<Vec<f32>> {
            Ok(vec![text.len() as f32])
        }

        fn model_name(&self) -> &str {
            "test/length-embedding"
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        added: Mutex<Vec<(String, Vec<f32>)>>,
    }

    impl VectorStore for RecordingStore {
        fn add(&self, documents: &[Document], embeddings: &[Vec<f32>]) -> Result<()> {
            let mut added = self.added.lock().unwrap();
            for (doc, emb) in documents.iter().zip(embeddings) {
                added.push((doc.id.clone(), emb.clone()));
            }
            Ok(())
        }

        fn query(&self, _query: &[f32], _k: usize) -> Result<Vec<Document>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_index_one_vector_per_document_in_order() {
        let store = Arc::new(RecordingStore::default());
        let indexer = Indexer::new(Arc::new(LengthEmbedding), store.clone());

        let docs = vec![
            Document::new("a", "hi", DocMetadata::plain_text("a")),
            Document::new("b", "hello", DocMetadata::plain_text("b")),
        ];
        indexer.index(&docs).unwrap();

        let added = store.added.lock().unwrap();
        assert_eq!(added.len(), 2);
        assert_eq!(added[0], ("a".to_string(), vec![2.0]));
        assert_eq!(added[1], ("b".to_string(), vec![5.0]));
    }
}
