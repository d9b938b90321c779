//! Food picture search.
//!
//! The model first rewrites the request into a bare dish name, then the first web image for it
//! is downloaded and decoded. Anything going wrong after the model call yields
//! [`AgentResult::image_not_found`] instead of an error.

use std::sync::Arc;

use async_trait::async_trait;
use cookbot_core::{AgentResult, CookbotError, ImagePayload, Result, TaskKind};
use image_search_client::{ImageFetcher, ImageSearch};
use llm_client::LlmClient;
use prompt::templates::SEARCH;
use tracing::{info, instrument, warn};

use crate::strategy::{render_prompt, Strategy, StrategyInput};

pub struct ImageSearchStrategy {
    llm: Arc<dyn LlmClient>,
    search: Arc<dyn ImageSearch>,
    fetcher: Arc<dyn ImageFetcher>,
}

impl ImageSearchStrategy {
    pub fn new(
        llm: Arc<dyn LlmClient>,
        search: Arc<dyn ImageSearch>,
        fetcher: Arc<dyn ImageFetcher>,
    ) -> Self {
        Self {
            llm,
            search,
            fetcher,
        }
    }

    async fn find_image(&self, phrase: &str) -> anyhow::Result<Option<AgentResult>> {
        let Some(hit) = self.search.search_image(phrase).await? else {
            return Ok(None);
        };
        let image = self.fetcher.fetch_image(&hit.image_url).await?;
        let payload = ImagePayload {
            bytes: image.bytes,
            format: image.format,
            width: image.width,
            height: image.height,
        };
        let source_url = Some(hit.source_url).filter(|u| !u.is_empty());
        Ok(Some(AgentResult::image(payload, hit.image_url, source_url)))
    }
}

#[async_trait]
impl Strategy for ImageSearchStrategy {
    fn task(&self) -> TaskKind {
        TaskKind::SearchImage
    }

    #[instrument(skip(self, input), fields(query = %input.input))]
    async fn run(&self, input: StrategyInput<'_>) -> Result<AgentResult> {
        let history = input.chat_history.render_for_prompt();
        let prompt = render_prompt(
            SEARCH,
            &[("query", input.input), ("chat_history", &history)],
        )?;
        let phrase = self.llm.complete(&prompt).await.map_err(CookbotError::Llm)?;
        let phrase = phrase.trim();
        info!(phrase = %phrase, "step: image search phrase");

        match self.find_image(phrase).await {
            Ok(Some(result)) => {
                info!(image_url = ?result.image, "step: image found");
                Ok(result)
            }
            Ok(None) => {
                warn!(phrase = %phrase, "image search returned no results");
                Ok(AgentResult::image_not_found())
            }
            Err(e) => {
                warn!(phrase = %phrase, error = %format!("{e:#}"), "image search failed");
                Ok(AgentResult::image_not_found())
            }
        }
    }
}
