//! # Recipe Storage
//!
//! The `RecipeStore` trait is implemented by vector storage backends (currently in-memory).

use async_trait::async_trait;

use crate::document::{IndexedRecipe, RecipeDocument};

/// Trait for storing recipe embeddings and searching them by similarity.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Adds a recipe. Fails if its embedding dimension differs from the stored ones.
    async fn add(&self, recipe: IndexedRecipe) -> Result<(), anyhow::Error>;

    /// Number of stored recipes.
    async fn len(&self) -> usize;

    /// Returns up to `limit` documents ordered by descending similarity, with their scores.
    async fn similarity_search(
        &self,
        query_embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<(f32, RecipeDocument)>, anyhow::Error>;

    /// Returns up to `limit` documents in insertion order.
    async fn list(&self, limit: usize) -> Result<Vec<RecipeDocument>, anyhow::Error>;
}
