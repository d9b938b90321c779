//! Intent classification.

use std::sync::Arc;

use async_trait::async_trait;
use cookbot_core::{CookbotError, Result};
use llm_client::LlmClient;
use prompt::templates::CLASSIFIER;
use tracing::{info, instrument};

use crate::strategy::render_prompt;

/// Returns a free-text intent label for a cleaned query.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, input: &str) -> Result<String>;
}

/// [`Classifier`] that asks the language model with the classifier prompt.
pub struct LlmClassifier {
    llm: Arc<dyn LlmClient>,
}

impl LlmClassifier {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Classifier for LlmClassifier {
    #[instrument(skip(self))]
    async fn classify(&self, input: &str) -> Result<String> {
        let prompt = render_prompt(CLASSIFIER, &[("input", input)])?;
        let label = self.llm.complete(&prompt).await.map_err(CookbotError::Llm)?;
        let label = label.trim().to_string();
        info!(label = %label, "step: intent classified");
        Ok(label)
    }
}
