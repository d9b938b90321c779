//! Retrieval-backed strategies: recommend an existing recipe or invent a new dish.
//!
//! Both embed the query, take the top-k recipes from the index and hand them to the model as
//! `{description}`. Recommendation includes the source link of every recipe so the model can
//! quote it; generation only needs the contents.

use std::sync::Arc;

use async_trait::async_trait;
use cookbot_core::{AgentResult, CookbotError, Result, TaskKind};
use llm_client::LlmClient;
use prompt::templates::{GENERATOR, RECOMMENDER};
use recipe_index::Retriever;
use tracing::{info, instrument};

use crate::format::{format_docs, format_docs_with_links};
use crate::strategy::{render_prompt, Strategy, StrategyInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalMode {
    Recommend,
    Generate,
}

pub struct RetrievalStrategy {
    mode: RetrievalMode,
    llm: Arc<dyn LlmClient>,
    retriever: Arc<dyn Retriever>,
}

impl RetrievalStrategy {
    pub fn recommender(llm: Arc<dyn LlmClient>, retriever: Arc<dyn Retriever>) -> Self {
        Self {
            mode: RetrievalMode::Recommend,
            llm,
            retriever,
        }
    }

    pub fn generator(llm: Arc<dyn LlmClient>, retriever: Arc<dyn Retriever>) -> Self {
        Self {
            mode: RetrievalMode::Generate,
            llm,
            retriever,
        }
    }
}

#[async_trait]
impl Strategy for RetrievalStrategy {
    fn task(&self) -> TaskKind {
        match self.mode {
            RetrievalMode::Recommend => TaskKind::Recommend,
            RetrievalMode::Generate => TaskKind::Generate,
        }
    }

    #[instrument(skip(self, input), fields(mode = ?self.mode, query = %input.input))]
    async fn run(&self, input: StrategyInput<'_>) -> Result<AgentResult> {
        let docs = self
            .retriever
            .retrieve(input.input)
            .await
            .map_err(CookbotError::Retrieval)?;
        info!(count = docs.len(), "step: recipes retrieved for prompt");

        let (template, description) = match self.mode {
            RetrievalMode::Recommend => (RECOMMENDER, format_docs_with_links(&docs)),
            RetrievalMode::Generate => (GENERATOR, format_docs(&docs)),
        };
        let history = input.chat_history.render_for_prompt();
        let prompt = render_prompt(
            template,
            &[
                ("description", &description),
                ("query", input.input),
                ("chat_history", &history),
            ],
        )?;

        let answer = self.llm.complete(&prompt).await.map_err(CookbotError::Llm)?;
        info!(answer_len = answer.len(), "step: retrieval strategy answered");
        Ok(AgentResult::text(self.task(), answer))
    }
}
