//! Conversational memory: what a finished turn leaves behind in the history.

use std::sync::Arc;

use cookbot_core::{AgentResult, ChatTurn, CookbotError, Result, TaskKind};
use llm_client::LlmClient;
use prompt::templates::SUMMARY;
use tracing::{debug, info, instrument};

use crate::history::ChatHistory;
use crate::strategy::render_prompt;

/// Assistant turn stored after an image search.
pub const IMAGE_PLACEHOLDER: &str = "Here is a picture of the dish you asked for.";

/// Appends finished turns to a [`ChatHistory`], summarizing text replies.
pub struct MemoryManager {
    llm: Arc<dyn LlmClient>,
}

impl MemoryManager {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Records `user_input` and the reply in `history`.
    ///
    /// Unknown turns are not recorded. The history is left unchanged when summarization fails.
    #[instrument(skip_all, fields(task = %result.task))]
    pub async fn record(
        &self,
        history: &mut ChatHistory,
        user_input: &str,
        result: &AgentResult,
    ) -> Result<()> {
        if result.is_unknown() {
            debug!("step: unknown turn not recorded");
            return Ok(());
        }

        let assistant_turn = match result.output_text() {
            Some(text) if result.task != TaskKind::SearchImage => {
                ChatTurn::assistant(self.summarize(text).await?)
            }
            _ => ChatTurn::assistant(IMAGE_PLACEHOLDER),
        };

        history.push(ChatTurn::user(user_input));
        history.push(assistant_turn);
        info!(
            history_len = history.len(),
            window = history.window(),
            "step: memory updated"
        );
        Ok(())
    }

    async fn summarize(&self, reply: &str) -> Result<String> {
        let prompt = render_prompt(SUMMARY, &[("input", reply)])?;
        let summary = self.llm.complete(&prompt).await.map_err(CookbotError::Llm)?;
        Ok(summary.trim().to_string())
    }
}
