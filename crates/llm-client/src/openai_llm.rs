//! OpenAI-compatible [`LlmClient`]: wraps openai-client, optionally prepends a system message.

use anyhow::Result;
use async_trait::async_trait;
use prompt::ChatMessage;
use tracing::instrument;

use super::{chat_message_to_openai, LlmClient, LlmConfig};

/// [`LlmClient`] backed by an OpenAI-compatible chat completion endpoint.
#[derive(Clone)]
pub struct OpenAILlmClient {
    client: openai_client::OpenAIClient,
    model: String,
    temperature: Option<f32>,
    system_prompt: Option<String>,
}

impl OpenAILlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::new(api_key),
            model: crate::config::DEFAULT_MODEL.to_string(),
            temperature: None,
            system_prompt: None,
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: openai_client::OpenAIClient::with_base_url(api_key, base_url),
            model: crate::config::DEFAULT_MODEL.to_string(),
            temperature: None,
            system_prompt: None,
        }
    }

    /// Builds a client from any [`LlmConfig`] (endpoint, model, temperature, system prompt).
    pub fn from_config(config: &dyn LlmConfig) -> Self {
        Self::with_base_url(config.api_key().to_string(), config.base_url().to_string())
            .with_model(config.model().to_string())
            .with_temperature(config.temperature())
            .with_system_prompt_opt(config.system_prompt().map(String::from))
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_system_prompt_opt(mut self, prompt: Option<String>) -> Self {
        self.system_prompt = prompt;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmClient for OpenAILlmClient {
    #[instrument(skip(self, messages), fields(model = %self.model))]
    async fn complete_messages(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let mut openai_messages = Vec::with_capacity(messages.len() + 1);
        if let Some(system) = &self.system_prompt {
            openai_messages.push(chat_message_to_openai(&ChatMessage::system(system.as_str()))?);
        }
        for msg in &messages {
            openai_messages.push(chat_message_to_openai(msg)?);
        }
        self.client
            .chat_completion(&self.model, openai_messages, self.temperature)
            .await
    }
}
