//! Recipe records as stored in the index and handed to prompts.

use serde::{Deserialize, Serialize};

/// Recipe attributes kept next to the searchable text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeMetadata {
    #[serde(default)]
    pub title: String,
    /// Source page of the recipe.
    #[serde(default)]
    pub link: String,
    /// Full cooking instructions, when the dataset has them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub nutrition: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default, rename = "time")]
    pub cook_time: String,
    #[serde(default)]
    pub class: String,
}

/// A retrieved recipe: text that was embedded plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDocument {
    pub content: String,
    pub metadata: RecipeMetadata,
}

impl RecipeDocument {
    pub fn new(content: impl Into<String>, metadata: RecipeMetadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }
}

/// A document together with its embedding, as persisted in snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedRecipe {
    pub document: RecipeDocument,
    pub embedding: Vec<f32>,
}
