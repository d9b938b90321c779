use thiserror::Error;

/// Errors surfaced by the agent to its caller.
///
/// Collaborator traits (LLM, retriever, image search) return `anyhow::Error`; the agent wraps
/// them here so callers can tell which stage of a turn failed.
#[derive(Error, Debug)]
pub enum CookbotError {
    #[error("LLM error: {0:#}")]
    Llm(anyhow::Error),

    #[error("Retrieval error: {0:#}")]
    Retrieval(anyhow::Error),

    #[error("Prompt error: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, CookbotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn llm_error_display_includes_cause_chain() {
        let err = CookbotError::Llm(anyhow::anyhow!("connection reset").context("chat completion"));
        let text = err.to_string();
        assert!(text.starts_with("LLM error: chat completion"));
        assert!(text.contains("connection reset"));
    }

    #[test]
    fn prompt_error_display() {
        let err = CookbotError::Prompt("missing value for {query}".to_string());
        assert_eq!(err.to_string(), "Prompt error: missing value for {query}");
    }
}
