//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and an OpenAI-compatible implementation. The agent only ever
//! needs "prompt in, text out" ([`LlmClient::complete`]); implementations provide the
//! message-level call and may prepend a system prompt.

use anyhow::Result;
use async_trait::async_trait;
use openai_client::{
    ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
    ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
};
use prompt::{ChatMessage, MessageRole};

mod config;
mod openai_llm;

pub use config::{EnvLlmConfig, LlmConfig};
pub use openai_llm::OpenAILlmClient;

/// Language-model capability used for classification, generation, summarization and
/// search-phrase cleanup.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Returns the model reply for the given messages (system/user/assistant).
    async fn complete_messages(&self, messages: Vec<ChatMessage>) -> Result<String>;

    /// Sends a rendered prompt as a single user message and returns the reply text.
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.complete_messages(vec![ChatMessage::user(prompt)]).await
    }
}

/// Converts a single [`ChatMessage`] into OpenAI API message format.
fn chat_message_to_openai(msg: &ChatMessage) -> Result<ChatCompletionRequestMessage> {
    let content = msg.content.clone();
    let openai_msg: ChatCompletionRequestMessage = match msg.role {
        MessageRole::System => ChatCompletionRequestSystemMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::User => ChatCompletionRequestUserMessageArgs::default()
            .content(content)
            .build()?
            .into(),
        MessageRole::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
            .content(content)
            .build()?
            .into(),
    };
    Ok(openai_msg)
}
