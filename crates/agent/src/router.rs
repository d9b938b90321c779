//! Intent routing.

use std::sync::Arc;

use cookbot_core::{AgentResult, Intent, Result};
use tracing::{info, instrument};

use crate::classifier::Classifier;
use crate::history::ChatHistory;
use crate::normalize::clean_input;
use crate::strategy::{Strategy, StrategyInput};

/// Reply for queries whose intent could not be recognized.
pub const UNKNOWN_MESSAGE: &str = "I didn't understand the request. 🤯 Try rephrasing! 🤔";

/// Cleans the input, classifies it and dispatches to the strategy of the intent.
#[derive(Clone)]
pub struct Router {
    classifier: Arc<dyn Classifier>,
    assistant: Arc<dyn Strategy>,
    recommender: Arc<dyn Strategy>,
    generator: Arc<dyn Strategy>,
    image_search: Arc<dyn Strategy>,
}

impl Router {
    pub fn new(
        classifier: Arc<dyn Classifier>,
        assistant: Arc<dyn Strategy>,
        recommender: Arc<dyn Strategy>,
        generator: Arc<dyn Strategy>,
        image_search: Arc<dyn Strategy>,
    ) -> Self {
        Self {
            classifier,
            assistant,
            recommender,
            generator,
            image_search,
        }
    }

    fn strategy_for(&self, intent: &Intent) -> Option<&Arc<dyn Strategy>> {
        match intent {
            Intent::AboutMe => Some(&self.assistant),
            Intent::Recommend => Some(&self.recommender),
            Intent::Generate => Some(&self.generator),
            Intent::ImageFood => Some(&self.image_search),
            Intent::Unknown(_) => None,
        }
    }

    /// Routes one query. Classifier and strategy errors propagate; an unrecognized intent is
    /// answered with [`UNKNOWN_MESSAGE`] without calling any strategy.
    #[instrument(skip(self, raw, history), fields(history_len = history.len()))]
    pub async fn route(&self, raw: &str, history: &ChatHistory) -> Result<AgentResult> {
        let input = clean_input(raw);
        let label = self.classifier.classify(&input).await?;
        let intent = Intent::from_label(&label);
        info!(label = %label, intent = ?intent, task = %intent.task(), "step: router dispatch");

        let Some(strategy) = self.strategy_for(&intent) else {
            info!(label = %label, "step: unknown intent, fallback reply");
            return Ok(AgentResult::unknown(UNKNOWN_MESSAGE));
        };

        let result = strategy
            .run(StrategyInput {
                input: &input,
                chat_history: history,
            })
            .await?;
        info!(task = %result.task, "step: router done");
        Ok(result)
    }
}
