//! Query-to-documents retrieval: embed the query, then top-k over a [`RecipeStore`].

use std::sync::Arc;

use async_trait::async_trait;
use embedding::EmbeddingService;
use tracing::{info, instrument};

use crate::document::RecipeDocument;
use crate::store::RecipeStore;

/// Number of documents returned per query unless configured otherwise.
pub const DEFAULT_TOP_K: usize = 3;

/// Returns the documents most relevant to a text query.
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Up to `k` documents, most similar first. Fewer when the index is smaller.
    async fn retrieve(&self, query: &str) -> Result<Vec<RecipeDocument>, anyhow::Error>;
}

/// [`Retriever`] backed by an embedding service and a vector store.
pub struct EmbeddingRetriever {
    store: Arc<dyn RecipeStore>,
    embedding_service: Arc<dyn EmbeddingService>,
    k: usize,
}

impl EmbeddingRetriever {
    pub fn new(store: Arc<dyn RecipeStore>, embedding_service: Arc<dyn EmbeddingService>) -> Self {
        Self {
            store,
            embedding_service,
            k: DEFAULT_TOP_K,
        }
    }

    /// Sets how many documents each query returns.
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn top_k(&self) -> usize {
        self.k
    }
}

#[async_trait]
impl Retriever for EmbeddingRetriever {
    #[instrument(skip(self), fields(k = self.k))]
    async fn retrieve(&self, query: &str) -> Result<Vec<RecipeDocument>, anyhow::Error> {
        let query_embedding = self.embedding_service.embed(query).await?;
        info!(
            dimension = query_embedding.len(),
            "step: query embedded"
        );

        let results = self
            .store
            .similarity_search(&query_embedding, self.k)
            .await?;
        info!(
            count = results.len(),
            titles = ?results.iter().map(|(_, d)| d.metadata.title.as_str()).collect::<Vec<_>>(),
            "step: recipes retrieved"
        );

        Ok(results.into_iter().map(|(_, doc)| doc).collect())
    }
}
