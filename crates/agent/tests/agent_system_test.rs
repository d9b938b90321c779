//! End-to-end tests of `AgentSystem::invoke` with stub collaborators.

mod common;

use agent::{ChatHistory, DEFAULT_HISTORY_WINDOW, IMAGE_PLACEHOLDER, UNKNOWN_MESSAGE};
use std::sync::Arc;

use common::{default_classifier_system, fixture, ScriptedLlm, FIXED_ANSWER, FIXED_SUMMARY};
use cookbot_core::{AgentOutput, ChatTurn, CookbotError, TaskKind};

/// **Test: Recommend turn returns the model answer and records query + summary.**
#[tokio::test]
async fn invoke_recommend_chicken_soup() {
    let f = fixture("recommended");
    let mut history = ChatHistory::default();

    let result = f.system.invoke("chicken soup", &mut history).await.unwrap();

    assert_eq!(result.output, AgentOutput::Text(FIXED_ANSWER.to_string()));
    assert_eq!(result.task, TaskKind::Recommend);
    assert_eq!(*f.retriever.calls.lock().unwrap(), 1);
    assert_eq!(
        history.turns(),
        &[ChatTurn::user("chicken soup"), ChatTurn::assistant(FIXED_SUMMARY)]
    );
}

/// **Test: Unrecognized label gives the fallback reply and leaves history unchanged.**
#[tokio::test]
async fn invoke_gibberish_is_unknown() {
    let f = fixture("unparseable gibberish");
    let mut history = ChatHistory::from_turns(
        vec![ChatTurn::user("borscht"), ChatTurn::assistant("Recommended borscht.")],
        DEFAULT_HISTORY_WINDOW,
    );
    let before = history.clone();

    let result = f.system.invoke("qwpoeiruty", &mut history).await.unwrap();

    assert_eq!(result.task, TaskKind::Unknown);
    assert_eq!(result.output_text(), Some(UNKNOWN_MESSAGE));
    assert_eq!(history, before);
    assert_eq!(f.llm.calls(), 0);
    assert_eq!(*f.retriever.calls.lock().unwrap(), 0);
}

/// **Test: A label with both "recommended" and "generate" routes to Recommend.**
#[tokio::test]
async fn router_precedence_recommended_over_generate() {
    let f = fixture("Recommended or generate");
    let result = f
        .system
        .route("something with soup", &ChatHistory::default())
        .await
        .unwrap();
    assert_eq!(result.task, TaskKind::Recommend);
}

/// **Test: Each keyword reaches its strategy.**
#[tokio::test]
async fn router_dispatches_every_intent() {
    for (label, task) in [
        ("hello", TaskKind::AboutMe),
        ("about me", TaskKind::AboutMe),
        ("recommended", TaskKind::Recommend),
        ("generate", TaskKind::Generate),
        ("image food", TaskKind::SearchImage),
        ("other", TaskKind::Unknown),
    ] {
        let f = fixture(label);
        let result = f.system.route("borscht", &ChatHistory::default()).await.unwrap();
        assert_eq!(result.task, task, "label {label:?}");
    }
}

/// **Test: History longer than the window is cut to exactly k after one more turn.**
#[tokio::test]
async fn invoke_keeps_history_at_window() {
    let f = fixture("generate");
    let k = 4;
    let turns = (0..k + 3).map(|i| ChatTurn::user(format!("q{i}"))).collect();
    let mut history = ChatHistory::from_turns(turns, k);
    for _ in 0..3 {
        f.system.invoke("new dish", &mut history).await.unwrap();
        assert_eq!(history.len(), k);
    }
    assert_eq!(history.turns()[k - 1], ChatTurn::assistant(FIXED_SUMMARY));
}

/// **Test: Image search with zero results gives the null record and the placeholder turn.**
#[tokio::test]
async fn invoke_image_search_without_results() {
    let f = fixture("image food");
    let mut history = ChatHistory::default();

    let result = f.system.invoke("show me borscht!!", &mut history).await.unwrap();

    assert_eq!(result.task, TaskKind::SearchImage);
    assert_eq!(result.output, AgentOutput::Empty);
    assert!(result.image.is_none() && result.url.is_none());
    assert_eq!(
        history.turns(),
        &[
            ChatTurn::user("show me borscht!!"),
            ChatTurn::assistant(IMAGE_PLACEHOLDER)
        ]
    );
}

/// **Test: The classifier sees cleaned input, memory keeps the raw text.**
#[tokio::test]
async fn invoke_cleans_input_for_model_only() {
    let f = fixture("about me");
    let mut history = ChatHistory::default();
    f.system.invoke("?? who are you", &mut history).await.unwrap();

    let prompts = f.llm.prompts.lock().unwrap().clone();
    assert!(prompts[0].contains("Query:  who are you"));
    assert_eq!(history.turns()[0], ChatTurn::user("?? who are you"));
}

/// **Test: The default classifier fills the classifier prompt and trims the model label.**
#[tokio::test]
async fn default_classifier_routes_trimmed_label() {
    let llm = Arc::new(ScriptedLlm::new(&[
        Some("  Recommended\n"),
        Some(FIXED_ANSWER),
        Some(FIXED_SUMMARY),
    ]));
    let (system, retriever) = default_classifier_system(llm.clone());
    let mut history = ChatHistory::default();

    let result = system.invoke("chicken soup", &mut history).await.unwrap();

    assert_eq!(result.task, TaskKind::Recommend);
    assert_eq!(result.output_text(), Some(FIXED_ANSWER));
    assert_eq!(*retriever.calls.lock().unwrap(), 1);
    assert_eq!(history.len(), 2);

    let prompts = llm.prompts.lock().unwrap().clone();
    assert_eq!(prompts.len(), 3);
    assert!(prompts[0].contains("classify it as either being about"));
    assert!(prompts[0].contains("<question>\nchicken soup\n</question>"));
}

/// **Test: A model failure in the default classifier is an LLM error and history is unchanged.**
#[tokio::test]
async fn default_classifier_failure_is_llm_error() {
    let llm = Arc::new(ScriptedLlm::new(&[None]));
    let (system, retriever) = default_classifier_system(llm.clone());
    let mut history = ChatHistory::default();

    let err = system.invoke("chicken soup", &mut history).await.unwrap_err();

    assert!(matches!(err, CookbotError::Llm(_)));
    assert!(err.to_string().contains("down"));
    assert!(history.is_empty());
    assert_eq!(*retriever.calls.lock().unwrap(), 0);
    assert_eq!(llm.prompts.lock().unwrap().len(), 1);
}
