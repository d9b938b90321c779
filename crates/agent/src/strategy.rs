//! Response strategy trait.
//!
//! Each routed intent is served by one strategy. Strategies get the cleaned input and the
//! current history and return the result record of the turn.

use async_trait::async_trait;
use cookbot_core::{AgentResult, CookbotError, Result, TaskKind};
use prompt::PromptTemplate;

use crate::history::ChatHistory;

/// Input handed to a strategy.
#[derive(Debug, Clone, Copy)]
pub struct StrategyInput<'a> {
    pub input: &'a str,
    pub chat_history: &'a ChatHistory,
}

#[async_trait]
pub trait Strategy: Send + Sync {
    /// Task tag of the results this strategy produces.
    fn task(&self) -> TaskKind;

    async fn run(&self, input: StrategyInput<'_>) -> Result<AgentResult>;
}

/// Renders one of the fixed templates, mapping a missing value to [`CookbotError::Prompt`].
pub(crate) fn render_prompt(template: &str, values: &[(&str, &str)]) -> Result<String> {
    PromptTemplate::from_template(template)
        .render(values)
        .map_err(|e| CookbotError::Prompt(e.to_string()))
}
