//! # Agent
//!
//! Routes a user query to one of four response strategies and keeps a short conversational
//! memory.
//!
//! One turn of [`AgentSystem::invoke`]:
//!
//! 1. [`clean_input`] strips stray `?`/`!` runs
//! 2. the [`Classifier`] labels the query; [`cookbot_core::Intent::from_label`] maps the label
//! 3. the [`Router`] runs the matching [`Strategy`] (or returns the fallback reply)
//! 4. the [`MemoryManager`] appends the user query and a summary of the reply to the
//!    [`ChatHistory`], which keeps the last *k* turns
//!
//! ## Strategies
//!
//! - [`AssistantStrategy`]: greetings and "what can you do"
//! - [`RetrievalStrategy`]: recommend a recipe from the index, or generate a new dish
//! - [`ImageSearchStrategy`]: find a picture of a dish; search failures give an empty result
//!
//! ## External interactions
//!
//! - **llm-client**: classification, answers, search phrases, summaries
//! - **recipe-index**: top-k recipes for the retrieval strategies
//! - **image-search-client**: web image search and download

mod assistant;
mod classifier;
mod format;
mod history;
mod image_search;
mod memory;
mod normalize;
mod retrieval;
mod router;
mod strategy;
mod system;

pub use assistant::AssistantStrategy;
pub use classifier::{Classifier, LlmClassifier};
pub use format::{format_docs, format_docs_with_links};
pub use history::{ChatHistory, DEFAULT_HISTORY_WINDOW};
pub use image_search::ImageSearchStrategy;
pub use memory::{MemoryManager, IMAGE_PLACEHOLDER};
pub use normalize::clean_input;
pub use retrieval::{RetrievalMode, RetrievalStrategy};
pub use router::{Router, UNKNOWN_MESSAGE};
pub use strategy::{Strategy, StrategyInput};
pub use system::{AgentSystem, AgentSystemBuilder};

#[cfg(test)]
mod strategies_test;
