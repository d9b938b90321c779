//! Application config loaded from environment variables.
//!
//! [`AppConfig`] holds what every command needs (index path, log file, retrieval and image
//! search knobs). [`CookbotConfig`] adds the LLM and embedding configs, which live in their
//! own crates, and is only loaded by commands that talk to the models.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use agent::DEFAULT_HISTORY_WINDOW;
use anyhow::{Context, Result};
use embedding::EnvEmbeddingConfig;
use image_search_client::{SafeSearch, DEFAULT_REGION};
use llm_client::EnvLlmConfig;
use recipe_index::DEFAULT_TOP_K;

pub const DEFAULT_RECIPE_INDEX_PATH: &str = "data/processed/recipe_index.json";
pub const DEFAULT_LOG_FILE: &str = "logs/cookbot.log";
pub const DEFAULT_IMAGE_SEARCH_TIMEOUT_SECS: u64 = 10;

/// Config shared by all commands.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// RECIPE_INDEX_PATH
    pub recipe_index_path: String,
    /// RETRIEVER_TOP_K
    pub retriever_top_k: usize,
    /// HISTORY_WINDOW
    pub history_window: usize,
    /// IMAGE_SEARCH_REGION
    pub image_search_region: String,
    /// IMAGE_SEARCH_SAFESEARCH
    pub image_search_safesearch: SafeSearch,
    /// IMAGE_SEARCH_TIMEOUT_SECS
    pub image_search_timeout_secs: u64,
    /// LOG_FILE
    pub log_file: String,
}

/// Reads `key`, falling back to `default` when unset or blank. Unparsable values are errors.
fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{key}={raw:?} is invalid: {e}")),
        _ => Ok(default),
    }
}

fn env_string(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let retriever_top_k = env_parse("RETRIEVER_TOP_K", DEFAULT_TOP_K)?;
        if retriever_top_k == 0 {
            anyhow::bail!("RETRIEVER_TOP_K must be at least 1");
        }
        let image_search_safesearch = match env::var("IMAGE_SEARCH_SAFESEARCH") {
            Ok(raw) if !raw.trim().is_empty() => raw
                .parse::<SafeSearch>()
                .context("IMAGE_SEARCH_SAFESEARCH")?,
            _ => SafeSearch::default(),
        };

        Ok(Self {
            recipe_index_path: env_string("RECIPE_INDEX_PATH", DEFAULT_RECIPE_INDEX_PATH),
            retriever_top_k,
            history_window: env_parse("HISTORY_WINDOW", DEFAULT_HISTORY_WINDOW)?,
            image_search_region: env_string("IMAGE_SEARCH_REGION", DEFAULT_REGION),
            image_search_safesearch,
            image_search_timeout_secs: env_parse(
                "IMAGE_SEARCH_TIMEOUT_SECS",
                DEFAULT_IMAGE_SEARCH_TIMEOUT_SECS,
            )?,
            log_file: env_string("LOG_FILE", DEFAULT_LOG_FILE),
        })
    }

    pub fn image_search_timeout(&self) -> Duration {
        Duration::from_secs(self.image_search_timeout_secs)
    }
}

/// Full config for commands that run the assistant.
pub struct CookbotConfig {
    pub app: AppConfig,
    pub llm: EnvLlmConfig,
    pub embedding: EnvEmbeddingConfig,
}

impl CookbotConfig {
    /// Adds LLM and embedding config to an already loaded [`AppConfig`].
    pub fn load(app: AppConfig) -> Result<Self> {
        let llm = EnvLlmConfig::from_env().context("Load LLM config (OPENAI_API_KEY, MODEL)")?;
        let embedding = EnvEmbeddingConfig::from_env()?;
        embedding.validate()?;
        Ok(Self {
            app,
            llm,
            embedding,
        })
    }
}
