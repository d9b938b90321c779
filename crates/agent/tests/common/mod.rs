//! Stub collaborators shared by the agent integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use agent::{AgentSystem, Classifier};
use async_trait::async_trait;
use image_search_client::{FetchedImage, ImageFetcher, ImageHit, ImageSearch};
use llm_client::LlmClient;
use prompt::ChatMessage;
use recipe_index::{RecipeDocument, RecipeMetadata, Retriever};

pub const FIXED_ANSWER: &str = "Classic chicken soup: chicken, carrots, noodles.";
pub const FIXED_SUMMARY: &str = "Recommended chicken soup.";

/// Classifier returning a fixed label.
pub struct StubClassifier(pub String);

#[async_trait]
impl Classifier for StubClassifier {
    async fn classify(&self, _input: &str) -> cookbot_core::Result<String> {
        Ok(self.0.clone())
    }
}

/// Answers summary prompts with [`FIXED_SUMMARY`] and everything else with [`FIXED_ANSWER`].
#[derive(Default)]
pub struct StubLlm {
    pub prompts: Mutex<Vec<String>>,
}

impl StubLlm {
    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for StubLlm {
    async fn complete_messages(&self, messages: Vec<ChatMessage>) -> anyhow::Result<String> {
        let prompt = messages
            .into_iter()
            .map(|m| m.content)
            .collect::<Vec<_>>()
            .join("\n");
        let reply = if prompt.contains("<reply>") {
            FIXED_SUMMARY
        } else {
            FIXED_ANSWER
        };
        self.prompts.lock().unwrap().push(prompt);
        Ok(reply.to_string())
    }
}

/// Replies from a fixed script, one entry per call; `None` entries fail the call.
pub struct ScriptedLlm {
    replies: Mutex<Vec<Option<String>>>,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedLlm {
    pub fn new(replies: &[Option<&str>]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().rev().map(|r| r.map(String::from)).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn complete_messages(&self, messages: Vec<ChatMessage>) -> anyhow::Result<String> {
        let prompt = messages
            .into_iter()
            .map(|m| m.content)
            .collect::<Vec<_>>()
            .join("\n");
        self.prompts.lock().unwrap().push(prompt);
        match self.replies.lock().unwrap().pop() {
            Some(Some(reply)) => Ok(reply),
            Some(None) => anyhow::bail!("down"),
            None => anyhow::bail!("no scripted reply left"),
        }
    }
}

/// System using the default model-backed classifier.
pub fn default_classifier_system(llm: Arc<ScriptedLlm>) -> (AgentSystem, Arc<StubRetriever>) {
    let retriever = Arc::new(StubRetriever::default());
    let system = AgentSystem::builder(
        llm,
        retriever.clone(),
        Arc::new(EmptyImageSearch),
        Arc::new(FailingFetcher),
    )
    .build();
    (system, retriever)
}

/// Retriever returning one chicken soup recipe and counting calls.
#[derive(Default)]
pub struct StubRetriever {
    pub calls: Mutex<usize>,
}

#[async_trait]
impl Retriever for StubRetriever {
    async fn retrieve(&self, _query: &str) -> anyhow::Result<Vec<RecipeDocument>> {
        *self.calls.lock().unwrap() += 1;
        Ok(vec![RecipeDocument::new(
            "Chicken soup with noodles",
            RecipeMetadata {
                title: "Chicken soup".to_string(),
                link: "https://example.org/chicken-soup".to_string(),
                ..Default::default()
            },
        )])
    }
}

/// Image search that never finds anything.
pub struct EmptyImageSearch;

#[async_trait]
impl ImageSearch for EmptyImageSearch {
    async fn search_image(&self, _query: &str) -> anyhow::Result<Option<ImageHit>> {
        Ok(None)
    }
}

pub struct FailingFetcher;

#[async_trait]
impl ImageFetcher for FailingFetcher {
    async fn fetch_image(&self, url: &str) -> anyhow::Result<FetchedImage> {
        anyhow::bail!("unexpected download of {url}")
    }
}

pub struct Fixture {
    pub system: AgentSystem,
    pub llm: Arc<StubLlm>,
    pub retriever: Arc<StubRetriever>,
}

/// System whose classifier always answers `label`.
pub fn fixture(label: &str) -> Fixture {
    let llm = Arc::new(StubLlm::default());
    let retriever = Arc::new(StubRetriever::default());
    let system = AgentSystem::builder(
        llm.clone(),
        retriever.clone(),
        Arc::new(EmptyImageSearch),
        Arc::new(FailingFetcher),
    )
    .with_classifier(Arc::new(StubClassifier(label.to_string())))
    .build();
    Fixture {
        system,
        llm,
        retriever,
    }
}
