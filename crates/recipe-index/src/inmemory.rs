//! # In-Memory Recipe Index
//!
//! [`RecipeStore`] implementation holding all recipes and their embeddings in memory, searched
//! by brute-force cosine similarity.
//!
//! The index is built offline by the ingestion pipeline and shipped as a JSON snapshot:
//!
//! ```json
//! {"version": 1, "records": [{"document": {"content": "...", "metadata": {...}}, "embedding": [0.1, ...]}]}
//! ```
//!
//! ## Thread Safety
//!
//! The records live behind `Arc<RwLock<>>`; clones share the same data.

use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::document::{IndexedRecipe, RecipeDocument};
use crate::store::RecipeStore;

const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    records: Vec<IndexedRecipe>,
}

/// In-memory recipe index.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipeIndex {
    records: Arc<RwLock<Vec<IndexedRecipe>>>,
}

impl InMemoryRecipeIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a JSON snapshot from `path`.
    ///
    /// Fails on unreadable files, unknown snapshot versions, empty embeddings, or records whose
    /// dimensions disagree.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, anyhow::Error> {
        let path = path.as_ref();
        let raw = tokio::fs::read(path)
            .await
            .with_context(|| format!("read recipe index snapshot {}", path.display()))?;
        let snapshot: Snapshot = serde_json::from_slice(&raw)
            .with_context(|| format!("parse recipe index snapshot {}", path.display()))?;
        if snapshot.version != SNAPSHOT_VERSION {
            bail!(
                "unsupported recipe index snapshot version {} (expected {})",
                snapshot.version,
                SNAPSHOT_VERSION
            );
        }

        let index = Self::new();
        for (i, record) in snapshot.records.into_iter().enumerate() {
            index
                .add(record)
                .await
                .with_context(|| format!("snapshot record #{i}"))?;
        }
        info!(
            path = %path.display(),
            count = index.len().await,
            dimension = ?index.dimension().await,
            "Recipe index snapshot loaded"
        );
        Ok(index)
    }

    /// Writes the index as a JSON snapshot to `path`, creating parent directories.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<(), anyhow::Error> {
        let path = path.as_ref();
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            records: self.records.read().await.clone(),
        };
        let json = serde_json::to_vec(&snapshot)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("write recipe index snapshot {}", path.display()))?;
        info!(path = %path.display(), count = snapshot.records.len(), "Recipe index snapshot saved");
        Ok(())
    }

    /// Embedding dimension of the stored records, `None` when empty.
    pub async fn dimension(&self) -> Option<usize> {
        self.records.read().await.first().map(|r| r.embedding.len())
    }

    /// Calculates cosine similarity between two vectors; 0.0 for empty or zero vectors.
    fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        dot_product / (norm_a * norm_b)
    }
}

#[async_trait]
impl RecipeStore for InMemoryRecipeIndex {
    async fn add(&self, recipe: IndexedRecipe) -> Result<(), anyhow::Error> {
        if recipe.embedding.is_empty() {
            bail!("recipe {:?} has an empty embedding", recipe.document.metadata.title);
        }
        let mut records = self.records.write().await;
        if let Some(first) = records.first() {
            if first.embedding.len() != recipe.embedding.len() {
                bail!(
                    "embedding dimension {} does not match index dimension {}",
                    recipe.embedding.len(),
                    first.embedding.len()
                );
            }
        }
        debug!(
            title = %recipe.document.metadata.title,
            dimension = recipe.embedding.len(),
            "Adding recipe to in-memory index"
        );
        records.push(recipe);
        Ok(())
    }

    async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    async fn similarity_search(
        &self,
        query_embedding: &[f32],
        limit: usize,
    ) -> Result<Vec<(f32, RecipeDocument)>, anyhow::Error> {
        let records = self.records.read().await;
        if let Some(first) = records.first() {
            if first.embedding.len() != query_embedding.len() {
                bail!(
                    "query embedding dimension {} does not match index dimension {}",
                    query_embedding.len(),
                    first.embedding.len()
                );
            }
        }

        let mut scored: Vec<(f32, &IndexedRecipe)> = records
            .iter()
            .map(|r| (Self::cosine_similarity(query_embedding, &r.embedding), r))
            .collect();
        // Highest score first; NaN scores (from NaN components) go last.
        scored.sort_by(|a, b| {
            a.0.is_nan()
                .cmp(&b.0.is_nan())
                .then_with(|| b.0.total_cmp(&a.0))
        });

        let results: Vec<(f32, RecipeDocument)> = scored
            .into_iter()
            .take(limit)
            .map(|(score, r)| (score, r.document.clone()))
            .collect();

        info!(
            limit = limit,
            count = results.len(),
            top_score = ?results.first().map(|(s, _)| *s),
            "step: recipe index similarity_search done"
        );
        Ok(results)
    }

    async fn list(&self, limit: usize) -> Result<Vec<RecipeDocument>, anyhow::Error> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .take(limit)
            .map(|r| r.document.clone())
            .collect())
    }
}
