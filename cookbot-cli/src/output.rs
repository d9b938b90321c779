//! Rendering turn results for the terminal.

use cookbot_core::{AgentOutput, AgentResult};

/// Printed when a turn fails; the cause goes to the log.
pub const DEGRADED_MESSAGE: &str =
    "Can't process the request right now, please try again later! 😓";

pub const IMAGE_NOT_FOUND_MESSAGE: &str = "Couldn't find a picture of that dish. 😔";

pub fn render_result(result: &AgentResult) -> String {
    match &result.output {
        AgentOutput::Text(text) => text.clone(),
        AgentOutput::Image(image) => {
            let mut lines = vec![format!(
                "[image {}x{} {}] {}",
                image.width,
                image.height,
                image.format,
                result.image.as_deref().unwrap_or_default()
            )];
            if let Some(url) = &result.url {
                lines.push(format!("Source: {url}"));
            }
            lines.join("\n")
        }
        AgentOutput::Empty => IMAGE_NOT_FOUND_MESSAGE.to_string(),
    }
}
