//! Embedding configuration: trait and env-based implementation.

use anyhow::Result;
use std::env;

pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Embedding service configuration interface.
pub trait EmbeddingConfig: Send + Sync {
    fn api_key(&self) -> &str;
    /// Optional OpenAI-compatible base URL; `None` means the default OpenAI endpoint.
    fn base_url(&self) -> Option<&str>;
    fn model(&self) -> &str;
}

/// Embedding config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvEmbeddingConfig {
    pub embedding_api_key: String,
    pub embedding_base_url: Option<String>,
    pub embedding_model: String,
}

impl EmbeddingConfig for EnvEmbeddingConfig {
    fn api_key(&self) -> &str {
        &self.embedding_api_key
    }
    fn base_url(&self) -> Option<&str> {
        self.embedding_base_url.as_deref().filter(|s| !s.is_empty())
    }
    fn model(&self) -> &str {
        &self.embedding_model
    }
}

impl EnvEmbeddingConfig {
    /// Load from `EMBEDDING_API_KEY` (falls back to `OPENAI_API_KEY`), `EMBEDDING_BASE_URL`
    /// and `EMBEDDING_MODEL`.
    ///
    /// The chat endpoint (`OPENAI_BASE_URL`) is not reused: chat providers such as Groq have
    /// no embeddings API.
    pub fn from_env() -> Result<Self> {
        let embedding_api_key = env::var("EMBEDDING_API_KEY")
            .or_else(|_| env::var("OPENAI_API_KEY"))
            .unwrap_or_default();
        let embedding_base_url = env::var("EMBEDDING_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let embedding_model =
            env::var("EMBEDDING_MODEL").unwrap_or_else(|_| DEFAULT_EMBEDDING_MODEL.to_string());
        Ok(Self {
            embedding_api_key,
            embedding_base_url,
            embedding_model,
        })
    }

    /// Validate config: an API key is required.
    pub fn validate(&self) -> Result<()> {
        if self.embedding_api_key.is_empty() {
            anyhow::bail!("EMBEDDING_API_KEY or OPENAI_API_KEY must be set for recipe retrieval");
        }
        Ok(())
    }
}
