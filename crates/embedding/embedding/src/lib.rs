//! # Text Embeddings
//!
//! This crate defines the embedding service interface used to turn user queries into vectors
//! for the recipe similarity search. Recipes in the index must have been embedded with the
//! same model.

use async_trait::async_trait;

mod config;
pub use config::{EmbeddingConfig, EnvEmbeddingConfig, DEFAULT_EMBEDDING_MODEL};

/// Service for generating text embeddings.
#[async_trait]
pub trait EmbeddingService: Send + Sync {
    /// Generates an embedding vector for a single text string.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, anyhow::Error>;
}
