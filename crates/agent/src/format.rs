//! Flattening retrieved recipes into the `{description}` prompt block.

use recipe_index::RecipeDocument;

/// Document contents separated by blank lines.
pub fn format_docs(docs: &[RecipeDocument]) -> String {
    docs.iter()
        .map(|d| d.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Like [`format_docs`], with a `More: <link>` line after each document.
pub fn format_docs_with_links(docs: &[RecipeDocument]) -> String {
    docs.iter()
        .map(|d| format!("{}\nMore: {}", d.content, d.metadata.link))
        .collect::<Vec<_>>()
        .join("\n\n")
}
