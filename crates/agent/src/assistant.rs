//! Greetings and questions about the assistant itself.

use std::sync::Arc;

use async_trait::async_trait;
use cookbot_core::{AgentResult, CookbotError, Result, TaskKind};
use llm_client::LlmClient;
use prompt::templates::ASSISTANT;
use tracing::{info, instrument};

use crate::strategy::{render_prompt, Strategy, StrategyInput};

pub struct AssistantStrategy {
    llm: Arc<dyn LlmClient>,
}

impl AssistantStrategy {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Strategy for AssistantStrategy {
    fn task(&self) -> TaskKind {
        TaskKind::AboutMe
    }

    #[instrument(skip(self, input), fields(query = %input.input))]
    async fn run(&self, input: StrategyInput<'_>) -> Result<AgentResult> {
        let history = input.chat_history.render_for_prompt();
        let prompt = render_prompt(
            ASSISTANT,
            &[("query", input.input), ("chat_history", &history)],
        )?;
        let answer = self.llm.complete(&prompt).await.map_err(CookbotError::Llm)?;
        info!(answer_len = answer.len(), "step: assistant answered");
        Ok(AgentResult::text(self.task(), answer))
    }
}
