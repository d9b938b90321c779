//! # Recipe Index
//!
//! Similarity search over recipe documents for the recommend and generate strategies.
//!
//! ## Modules
//!
//! - [`document`] - RecipeDocument, RecipeMetadata, IndexedRecipe
//! - [`store`] - RecipeStore trait (vector storage backend)
//! - [`inmemory`] - InMemoryRecipeIndex: cosine top-k, JSON snapshot load/save
//! - [`retriever`] - Retriever trait and EmbeddingRetriever (embed query, then top-k)
//!
//! ## External Interactions
//!
//! - **embedding**: EmbeddingService turns the user query into a vector
//! - **File system**: snapshots are produced by the ingestion pipeline and loaded at startup

pub mod document;
pub mod inmemory;
pub mod retriever;
pub mod store;

pub use document::{IndexedRecipe, RecipeDocument, RecipeMetadata};
pub use inmemory::InMemoryRecipeIndex;
pub use retriever::{EmbeddingRetriever, Retriever, DEFAULT_TOP_K};
pub use store::RecipeStore;
