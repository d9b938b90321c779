//! LLM configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use std::env;

/// Default endpoint: Groq's OpenAI-compatible API.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TEMPERATURE: f32 = 0.0;

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn model(&self) -> &str;
    fn temperature(&self) -> f32;
    fn system_prompt(&self) -> Option<&str>;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvLlmConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub llm_system_prompt: Option<String>,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.openai_api_key
    }
    fn base_url(&self) -> &str {
        &self.openai_base_url
    }
    fn model(&self) -> &str {
        &self.llm_model
    }
    fn temperature(&self) -> f32 {
        self.llm_temperature
    }
    fn system_prompt(&self) -> Option<&str> {
        self.llm_system_prompt.as_deref()
    }
}

impl EnvLlmConfig {
    /// Load from `OPENAI_API_KEY` (required), `OPENAI_BASE_URL`, `MODEL`, `LLM_TEMPERATURE`
    /// and `LLM_SYSTEM_PROMPT`.
    pub fn from_env() -> Result<Self> {
        let openai_api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let openai_base_url = env::var("OPENAI_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let llm_model = env::var("MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let llm_temperature = match env::var("LLM_TEMPERATURE") {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("LLM_TEMPERATURE is not a number: {raw}"))?,
            Err(_) => DEFAULT_TEMPERATURE,
        };
        let llm_system_prompt = env::var("LLM_SYSTEM_PROMPT")
            .ok()
            .filter(|s| !s.trim().is_empty());
        Ok(Self {
            openai_api_key,
            openai_base_url,
            llm_model,
            llm_temperature,
            llm_system_prompt,
        })
    }
}
