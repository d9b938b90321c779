//! Unit tests for the response strategies and the memory manager.
//!
//! Collaborators are in-process stubs; no network access.

use super::*;
use async_trait::async_trait;
use cookbot_core::{AgentOutput, AgentResult, ChatTurn, CookbotError, TaskKind};
use image_search_client::{FetchedImage, ImageFetcher, ImageHit, ImageSearch};
use llm_client::LlmClient;
use prompt::ChatMessage;
use recipe_index::{RecipeDocument, RecipeMetadata, Retriever};
use std::sync::{Arc, Mutex};

/// Returns a fixed reply (or fails) and records every prompt it receives.
struct RecordingLlm {
    reply: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl RecordingLlm {
    fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for RecordingLlm {
    async fn complete_messages(&self, messages: Vec<ChatMessage>) -> anyhow::Result<String> {
        let prompt = messages
            .into_iter()
            .map(|m| m.content)
            .collect::<Vec<_>>()
            .join("\n");
        self.prompts.lock().unwrap().push(prompt);
        self.reply
            .clone()
            .ok_or_else(|| anyhow::anyhow!("model unavailable"))
    }
}

struct StubRetriever {
    docs: Option<Vec<RecipeDocument>>,
}

#[async_trait]
impl Retriever for StubRetriever {
    async fn retrieve(&self, _query: &str) -> anyhow::Result<Vec<RecipeDocument>> {
        self.docs
            .clone()
            .ok_or_else(|| anyhow::anyhow!("index unavailable"))
    }
}

fn recipe(title: &str, link: &str) -> RecipeDocument {
    RecipeDocument::new(
        format!("Title: {title}"),
        RecipeMetadata {
            title: title.to_string(),
            link: link.to_string(),
            ..Default::default()
        },
    )
}

enum SearchBehavior {
    Hit,
    NoResults,
    Fail,
}

struct StubSearch(SearchBehavior);

#[async_trait]
impl ImageSearch for StubSearch {
    async fn search_image(&self, _query: &str) -> anyhow::Result<Option<ImageHit>> {
        match self.0 {
            SearchBehavior::Hit => Ok(Some(ImageHit {
                image_url: "https://img.example.org/borscht.jpg".to_string(),
                source_url: "https://example.org/borscht".to_string(),
                title: "Borscht".to_string(),
            })),
            SearchBehavior::NoResults => Ok(None),
            SearchBehavior::Fail => anyhow::bail!("connection refused"),
        }
    }
}

struct StubFetcher {
    ok: bool,
}

#[async_trait]
impl ImageFetcher for StubFetcher {
    async fn fetch_image(&self, _url: &str) -> anyhow::Result<FetchedImage> {
        if self.ok {
            Ok(FetchedImage {
                bytes: vec![1, 2, 3],
                format: "jpeg".to_string(),
                width: 640,
                height: 480,
            })
        } else {
            anyhow::bail!("failed to decode image")
        }
    }
}

fn image_strategy(llm: Arc<RecordingLlm>, search: SearchBehavior, fetch_ok: bool) -> ImageSearchStrategy {
    ImageSearchStrategy::new(
        llm,
        Arc::new(StubSearch(search)),
        Arc::new(StubFetcher { ok: fetch_ok }),
    )
}

fn input<'a>(text: &'a str, history: &'a ChatHistory) -> StrategyInput<'a> {
    StrategyInput {
        input: text,
        chat_history: history,
    }
}

/// **Test: Assistant strategy inlines the history and tags the result "About Me".**
#[tokio::test]
async fn test_assistant_strategy_uses_history() {
    let llm = RecordingLlm::replying("I can recommend recipes.");
    let strategy = AssistantStrategy::new(llm.clone());
    let mut history = ChatHistory::default();
    history.push(ChatTurn::user("hello"));

    let result = strategy.run(input("what can you do", &history)).await.unwrap();

    assert_eq!(result.task, TaskKind::AboutMe);
    assert_eq!(result.output_text(), Some("I can recommend recipes."));
    let prompt = &llm.prompts()[0];
    assert!(prompt.contains("User: hello"));
    assert!(prompt.contains("Query: what can you do"));
}

/// **Test: Recommendation prompt carries recipe links; generation prompt does not.**
#[tokio::test]
async fn test_retrieval_strategies_format_description() {
    let docs = vec![recipe("Borscht", "https://example.org/borscht")];

    let llm = RecordingLlm::replying("Try borscht");
    let retriever = Arc::new(StubRetriever { docs: Some(docs.clone()) });
    let recommend = RetrievalStrategy::recommender(llm.clone(), retriever.clone());
    let history = ChatHistory::default();
    let result = recommend.run(input("beet soup", &history)).await.unwrap();
    assert_eq!(result.task, TaskKind::Recommend);
    assert!(llm.prompts()[0].contains("Title: Borscht\nMore: https://example.org/borscht"));

    let llm = RecordingLlm::replying("Beet surprise");
    let generate = RetrievalStrategy::generator(llm.clone(), retriever);
    let result = generate.run(input("beet soup", &history)).await.unwrap();
    assert_eq!(result.task, TaskKind::Generate);
    assert_eq!(result.output_text(), Some("Beet surprise"));
    let prompt = &llm.prompts()[0];
    assert!(prompt.contains("Title: Borscht"));
    assert!(!prompt.contains("More:"));
}

/// **Test: Empty retrieval still reaches the model with an empty description.**
#[tokio::test]
async fn test_retrieval_with_no_documents() {
    let llm = RecordingLlm::replying("No matching recipe, but here's an idea");
    let strategy =
        RetrievalStrategy::recommender(llm.clone(), Arc::new(StubRetriever { docs: Some(vec![]) }));
    let result = strategy
        .run(input("dragon fruit stew", &ChatHistory::default()))
        .await
        .unwrap();
    assert_eq!(result.task, TaskKind::Recommend);
    assert!(llm.prompts()[0].contains("<description>\n\n</description>"));
}

/// **Test: Retriever failure propagates as a retrieval error, the model is not called.**
#[tokio::test]
async fn test_retrieval_error_propagates() {
    let llm = RecordingLlm::replying("unused");
    let strategy = RetrievalStrategy::generator(llm.clone(), Arc::new(StubRetriever { docs: None }));
    let err = strategy
        .run(input("soup", &ChatHistory::default()))
        .await
        .unwrap_err();
    assert!(matches!(err, CookbotError::Retrieval(_)));
    assert!(llm.prompts().is_empty());
}

/// **Test: Image search success returns the decoded image with both links.**
#[tokio::test]
async fn test_image_search_success() {
    let llm = RecordingLlm::replying("  borscht \n");
    let strategy = image_strategy(llm.clone(), SearchBehavior::Hit, true);

    let result = strategy
        .run(input("show me borscht pls", &ChatHistory::default()))
        .await
        .unwrap();

    assert_eq!(result.task, TaskKind::SearchImage);
    assert_eq!(result.image.as_deref(), Some("https://img.example.org/borscht.jpg"));
    assert_eq!(result.url.as_deref(), Some("https://example.org/borscht"));
    match result.output {
        AgentOutput::Image(payload) => {
            assert_eq!(payload.format, "jpeg");
            assert_eq!((payload.width, payload.height), (640, 480));
        }
        other => panic!("expected image output, got {other:?}"),
    }
}

/// **Test: No results, search failure and decode failure all give the null record.**
#[tokio::test]
async fn test_image_search_failures_give_null_record() {
    let cases = [
        (SearchBehavior::NoResults, true),
        (SearchBehavior::Fail, true),
        (SearchBehavior::Hit, false),
    ];
    for (search, fetch_ok) in cases {
        let strategy = image_strategy(RecordingLlm::replying("borscht"), search, fetch_ok);
        let result = strategy
            .run(input("borscht photo", &ChatHistory::default()))
            .await
            .unwrap();
        assert_eq!(result, AgentResult::image_not_found());
    }
}

/// **Test: Model failure while building the search phrase is an LLM error.**
#[tokio::test]
async fn test_image_search_model_failure_propagates() {
    let strategy = image_strategy(RecordingLlm::failing(), SearchBehavior::Hit, true);
    let err = strategy
        .run(input("borscht photo", &ChatHistory::default()))
        .await
        .unwrap_err();
    assert!(matches!(err, CookbotError::Llm(_)));
}

/// **Test: Text replies are summarized; image turns get the placeholder.**
#[tokio::test]
async fn test_memory_records_summary_and_placeholder() {
    let llm = RecordingLlm::replying("Recommended borscht.");
    let memory = MemoryManager::new(llm.clone());
    let mut history = ChatHistory::default();

    let text = AgentResult::text(TaskKind::Recommend, "Long answer with a link...");
    memory.record(&mut history, "beet soup??", &text).await.unwrap();
    assert_eq!(
        history.turns(),
        &[
            ChatTurn::user("beet soup??"),
            ChatTurn::assistant("Recommended borscht.")
        ]
    );
    assert!(llm.prompts()[0].contains("Long answer with a link..."));

    memory
        .record(&mut history, "show it", &AgentResult::image_not_found())
        .await
        .unwrap();
    assert_eq!(history.len(), 4);
    assert_eq!(history.turns()[3], ChatTurn::assistant(IMAGE_PLACEHOLDER));
    assert_eq!(llm.prompts().len(), 1);
}

/// **Test: Unknown results and failed summaries leave the history untouched.**
#[tokio::test]
async fn test_memory_skips_unknown_and_failures() {
    let mut history = ChatHistory::default();
    history.push(ChatTurn::user("earlier"));
    let before = history.clone();

    let memory = MemoryManager::new(RecordingLlm::replying("unused"));
    memory
        .record(&mut history, "asdf", &AgentResult::unknown("?"))
        .await
        .unwrap();
    assert_eq!(history, before);

    let memory = MemoryManager::new(RecordingLlm::failing());
    let err = memory
        .record(&mut history, "soup", &AgentResult::text(TaskKind::Generate, "x"))
        .await
        .unwrap_err();
    assert!(matches!(err, CookbotError::Llm(_)));
    assert_eq!(history, before);
}
