//! # OpenAI Embedding Service
//!
//! [`EmbeddingService`] implementation over OpenAI's embeddings API (or any compatible endpoint).
//! Used to embed user queries before the recipe similarity search.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedding::EmbeddingService;
//! use openai_embedding::OpenAIEmbedding;
//!
//! async fn example() -> Result<(), anyhow::Error> {
//!     let service = OpenAIEmbedding::new("sk-...".to_string(), "text-embedding-3-small".to_string(), None);
//!     let vector = service.embed("chicken soup with noodles").await?;
//!     println!("dimension: {}", vector.len());
//!     Ok(())
//! }
//! ```

use async_openai::{config::OpenAIConfig, types::CreateEmbeddingRequestArgs, Client};
use async_trait::async_trait;
use embedding::{EmbeddingConfig, EmbeddingService};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Timeout for a single embed request (connect + request + response).
const EMBED_TIMEOUT: Duration = Duration::from_secs(30);
const LOG_PREVIEW_CHARS: usize = 200;

/// OpenAI embedding service. Holds the async-openai client and model name.
#[derive(Debug, Clone)]
pub struct OpenAIEmbedding {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAIEmbedding {
    /// Creates a service for `model`; `base_url` overrides the OpenAI endpoint when non-empty.
    pub fn new(api_key: String, model: String, base_url: Option<&str>) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(api_key);
        if let Some(url) = base_url.filter(|s| !s.is_empty()) {
            openai_config = openai_config.with_api_base(url);
        }
        Self {
            client: Client::with_config(openai_config),
            model,
        }
    }

    pub fn from_config(config: &dyn EmbeddingConfig) -> Self {
        Self::new(
            config.api_key().to_string(),
            config.model().to_string(),
            config.base_url(),
        )
    }

    /// Returns the embedding model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

fn preview(text: &str) -> String {
    match text.char_indices().nth(LOG_PREVIEW_CHARS) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[async_trait]
impl EmbeddingService for OpenAIEmbedding {
    /// Embeds `text` with the configured model.
    ///
    /// # Errors
    ///
    /// API failures (auth, quota, network), a response without data, or no answer within 30s.
    #[instrument(skip(self, text), fields(model = %self.model, text_len = text.len()))]
    async fn embed(&self, text: &str) -> Result<Vec<f32>, anyhow::Error> {
        info!(text_preview = %preview(text), "step: embedding OpenAI embed request");

        let request = CreateEmbeddingRequestArgs::default()
            .model(self.model.clone())
            .input(vec![text])
            .build()?;

        let embeddings = self.client.embeddings();
        let response = match tokio::time::timeout(EMBED_TIMEOUT, embeddings.create(request)).await {
            Ok(Ok(r)) => {
                debug!("OpenAI embed response received");
                r
            }
            Ok(Err(e)) => {
                warn!(error = %e, "OpenAI embed request failed");
                return Err(e.into());
            }
            Err(_) => {
                warn!(
                    timeout_secs = EMBED_TIMEOUT.as_secs(),
                    "OpenAI embed request timed out"
                );
                anyhow::bail!(
                    "OpenAI embed request timed out after {} seconds",
                    EMBED_TIMEOUT.as_secs()
                );
            }
        };

        let embedding = match response.data.into_iter().next() {
            Some(item) => item.embedding,
            None => {
                warn!("OpenAI embed response has no embedding data");
                anyhow::bail!("No embedding in response");
            }
        };

        info!(dimension = embedding.len(), "step: embedding OpenAI embed done");
        Ok(embedding)
    }
}
