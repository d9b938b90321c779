//! # OpenAI API client
//!
//! Thin wrapper around [async-openai] for non-streamed chat completion against OpenAI or any
//! compatible endpoint (Groq, local gateways). Provides token masking for safe logging.

use async_openai::{config::OpenAIConfig, types::CreateChatCompletionRequestArgs, Client};
use std::sync::Arc;

pub use async_openai::types::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};

/// Masks an API key/token for safe logging: first 7 chars + "***" + last 4 chars.
/// Tokens of 11 chars or fewer become "***".
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[len - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

/// OpenAI chat client. Holds the API key only for masked logging.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Arc<Client<OpenAIConfig>>,
    api_key_for_logging: Option<String>,
}

impl OpenAIClient {
    /// Builds a client for the default OpenAI base URL.
    pub fn new(api_key: String) -> Self {
        let api_key_for_logging = Some(api_key.clone());
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Arc::new(Client::with_config(config)),
            api_key_for_logging,
        }
    }

    /// Builds a client for a custom base URL (e.g. `https://api.groq.com/openai/v1`).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let api_key_for_logging = Some(api_key.clone());
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self {
            client: Arc::new(Client::with_config(config)),
            api_key_for_logging,
        }
    }

    /// Sends a chat completion request and returns the first choice's text.
    ///
    /// `temperature` is passed through when set, otherwise the provider default applies.
    /// Logs masked key, request JSON (debug) and token usage.
    pub async fn chat_completion(
        &self,
        model: &str,
        messages: Vec<ChatCompletionRequestMessage>,
        temperature: Option<f32>,
    ) -> anyhow::Result<String> {
        let masked = self
            .api_key_for_logging
            .as_deref()
            .map(mask_token)
            .unwrap_or_else(|| "***".to_string());

        tracing::info!(
            model = %model,
            message_count = messages.len(),
            temperature = ?temperature,
            api_key = %masked,
            "OpenAI chat_completion request"
        );

        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(model).messages(messages);
        if let Some(t) = temperature {
            args.temperature(t);
        }
        let request = args.build()?;

        if let Ok(json) = serde_json::to_string_pretty(&request) {
            tracing::debug!(request_json = %json, "OpenAI chat_completion request JSON");
        }

        let response = self.client.chat().create(request).await?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI chat_completion usage"
            );
        }

        match response.choices.first() {
            Some(choice) => Ok(choice.message.content.clone().unwrap_or_default()),
            None => anyhow::bail!("No response from chat completion endpoint"),
        }
    }
}
