//! Builds the assistant from config: index snapshot, embedding retriever, LLM and image search.

use std::sync::Arc;

use agent::AgentSystem;
use anyhow::{Context, Result};
use image_search_client::{DuckDuckGoImageSearch, HttpImageFetcher};
use llm_client::{LlmClient, LlmConfig, OpenAILlmClient};
use openai_embedding::OpenAIEmbedding;
use recipe_index::{EmbeddingRetriever, InMemoryRecipeIndex, RecipeStore};
use tracing::{info, warn};

use crate::config::CookbotConfig;

/// Loads the recipe index snapshot named by `RECIPE_INDEX_PATH`.
pub async fn load_index(path: &str) -> Result<InMemoryRecipeIndex> {
    InMemoryRecipeIndex::load(path)
        .await
        .with_context(|| format!("Load recipe index (RECIPE_INDEX_PATH={path})"))
}

pub async fn build_agent(config: &CookbotConfig) -> Result<AgentSystem> {
    let index = load_index(&config.app.recipe_index_path).await?;
    let recipes = index.len().await;
    if recipes == 0 {
        warn!(path = %config.app.recipe_index_path, "Recipe index is empty");
    }

    let embedding = OpenAIEmbedding::from_config(&config.embedding);
    info!(model = %embedding.model(), recipes = recipes, "step: retriever ready");
    let retriever = EmbeddingRetriever::new(Arc::new(index), Arc::new(embedding))
        .with_top_k(config.app.retriever_top_k);

    let llm = OpenAILlmClient::from_config(&config.llm);
    info!(
        model = %config.llm.model(),
        base_url = %config.llm.base_url(),
        "step: LLM client ready"
    );
    let llm: Arc<dyn LlmClient> = Arc::new(llm);

    let timeout = config.app.image_search_timeout();
    let image_search = DuckDuckGoImageSearch::with_timeout(timeout)?
        .with_region(config.app.image_search_region.clone())
        .with_safesearch(config.app.image_search_safesearch);
    let image_fetcher = HttpImageFetcher::with_timeout(timeout)?;

    Ok(AgentSystem::builder(
        llm,
        Arc::new(retriever),
        Arc::new(image_search),
        Arc::new(image_fetcher),
    )
    .build())
}
