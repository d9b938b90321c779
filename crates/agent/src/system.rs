//! The assembled assistant: router plus memory.

use std::sync::Arc;

use cookbot_core::{AgentResult, Result};
use image_search_client::{ImageFetcher, ImageSearch};
use llm_client::LlmClient;
use recipe_index::Retriever;
use tracing::{info, instrument};

use crate::assistant::AssistantStrategy;
use crate::classifier::{Classifier, LlmClassifier};
use crate::history::ChatHistory;
use crate::image_search::ImageSearchStrategy;
use crate::memory::MemoryManager;
use crate::retrieval::RetrievalStrategy;
use crate::router::Router;

/// Cooking assistant shared across conversations; each conversation owns its [`ChatHistory`].
#[derive(Clone)]
pub struct AgentSystem {
    router: Router,
    memory: Arc<MemoryManager>,
}

/// Collects the collaborators of an [`AgentSystem`].
pub struct AgentSystemBuilder {
    llm: Arc<dyn LlmClient>,
    retriever: Arc<dyn Retriever>,
    image_search: Arc<dyn ImageSearch>,
    image_fetcher: Arc<dyn ImageFetcher>,
    classifier: Option<Arc<dyn Classifier>>,
}

impl AgentSystemBuilder {
    /// Replaces the default classifier (the language model with the classifier prompt).
    pub fn with_classifier(mut self, classifier: Arc<dyn Classifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn build(self) -> AgentSystem {
        let classifier = self
            .classifier
            .unwrap_or_else(|| Arc::new(LlmClassifier::new(self.llm.clone())));
        let router = Router::new(
            classifier,
            Arc::new(AssistantStrategy::new(self.llm.clone())),
            Arc::new(RetrievalStrategy::recommender(
                self.llm.clone(),
                self.retriever.clone(),
            )),
            Arc::new(RetrievalStrategy::generator(
                self.llm.clone(),
                self.retriever,
            )),
            Arc::new(ImageSearchStrategy::new(
                self.llm.clone(),
                self.image_search,
                self.image_fetcher,
            )),
        );
        AgentSystem {
            router,
            memory: Arc::new(MemoryManager::new(self.llm)),
        }
    }
}

impl AgentSystem {
    pub fn builder(
        llm: Arc<dyn LlmClient>,
        retriever: Arc<dyn Retriever>,
        image_search: Arc<dyn ImageSearch>,
        image_fetcher: Arc<dyn ImageFetcher>,
    ) -> AgentSystemBuilder {
        AgentSystemBuilder {
            llm,
            retriever,
            image_search,
            image_fetcher,
            classifier: None,
        }
    }

    /// Answers `input` without touching the history.
    pub async fn route(&self, input: &str, history: &ChatHistory) -> Result<AgentResult> {
        self.router.route(input, history).await
    }

    /// Answers `input` and records the turn in `history`.
    ///
    /// On error the history is unchanged.
    #[instrument(skip(self, input, history))]
    pub async fn invoke(&self, input: &str, history: &mut ChatHistory) -> Result<AgentResult> {
        info!(input_len = input.len(), history_len = history.len(), "step: invoke started");
        let result = self.router.route(input, history).await?;
        self.memory.record(history, input, &result).await?;
        info!(task = %result.task, history_len = history.len(), "step: invoke done");
        Ok(result)
    }
}
