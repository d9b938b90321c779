//! # Prompt
//!
//! Prompt templates with named `{placeholder}` slots, and the chat message types sent to LLM APIs.
//!
//! ## Template syntax
//!
//! - `{name}`: replaced by the value bound to `name` (identifier characters only)
//! - `{{` / `}}`: literal braces
//! - any other brace is kept as-is
//!
//! Rendering fails with [`PromptError::MissingVariable`] when a placeholder has no value;
//! extra values are ignored.
//!
//! ## Templates
//!
//! [`templates`] holds the six fixed prompts of the assistant (classifier, assistant,
//! recommender, generator, search, summary).
//!
//! ## External interactions
//!
//! - **AI models**: rendered prompts are sent to OpenAI-compatible chat APIs by `llm-client`.

use thiserror::Error;

pub mod templates;

/// Role of a message, one-to-one with OpenAI Chat Completions API `role` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    /// System instruction (API `role: "system"`).
    System,
    /// User message (API `role: "user"`).
    User,
    /// Assistant message (API `role: "assistant"`).
    Assistant,
}

/// A single chat message, one-to-one with one element of OpenAI `messages` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    #[error("missing value for placeholder {{{0}}}")]
    MissingVariable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Variable(String),
}

/// A parsed prompt template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    segments: Vec<Segment>,
    source_len: usize,
}

impl PromptTemplate {
    /// Parses `source`. Never fails: malformed braces are kept as literal text.
    pub fn from_template(source: &str) -> Self {
        Self {
            segments: parse(source),
            source_len: source.len(),
        }
    }

    /// Placeholder names in order of first appearance, without duplicates.
    pub fn variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Variable(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Fills every placeholder from `values` (`(name, value)` pairs).
    pub fn render(&self, values: &[(&str, &str)]) -> Result<String, PromptError> {
        let mut out = String::with_capacity(self.source_len);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Variable(name) => {
                    let value = values
                        .iter()
                        .find(|(key, _)| key == name)
                        .map(|(_, value)| *value)
                        .ok_or_else(|| PromptError::MissingVariable(name.clone()))?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn parse(source: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = source;

    while let Some(pos) = rest.find(['{', '}']) {
        literal.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            literal.push('{');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with("}}") {
            literal.push('}');
            rest = &tail[2..];
            continue;
        }
        if tail.starts_with('{') {
            if let Some(end) = tail[1..].find('}') {
                let name = &tail[1..1 + end];
                if is_identifier(name) {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Variable(name.to_string()));
                    rest = &tail[end + 2..];
                    continue;
                }
            }
        }
        // Lone brace: keep it and move on (both braces are one byte).
        literal.push_str(&tail[..1]);
        rest = &tail[1..];
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}
