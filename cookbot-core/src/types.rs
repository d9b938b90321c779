//! Core types: chat turns, intents, task kinds and the result record returned for each turn.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Speaker of a [`ChatTurn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

/// Content of a turn: plain text, or a reference to an image found for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnContent {
    Text {
        text: String,
    },
    Image {
        image_url: String,
        source_url: Option<String>,
    },
}

/// One entry of the conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: TurnContent,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: TurnContent::Text { text: text.into() },
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: TurnContent::Text { text: text.into() },
        }
    }

    pub fn assistant_image(image_url: impl Into<String>, source_url: Option<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: TurnContent::Image {
                image_url: image_url.into(),
                source_url,
            },
        }
    }

    /// Text of the turn, `None` for image references.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            TurnContent::Text { text } => Some(text),
            TurnContent::Image { .. } => None,
        }
    }

    /// "User: ..." / "Assistant: ..." line used when history is inlined into prompts.
    pub fn to_prompt_line(&self) -> String {
        let speaker = match self.role {
            TurnRole::User => "User",
            TurnRole::Assistant => "Assistant",
        };
        match &self.content {
            TurnContent::Text { text } => format!("{}: {}", speaker, text),
            TurnContent::Image { image_url, .. } => format!("{}: [image] {}", speaker, image_url),
        }
    }
}

/// Intent assigned to a query by the classifier.
///
/// The classifier answers with free text; [`Intent::from_label`] is the only place that
/// interprets that text. Everything downstream matches on the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Greeting or question about the assistant itself ("hello", "about me").
    AboutMe,
    /// Recommend an existing recipe ("recommended").
    Recommend,
    /// Invent a new dish ("generate").
    Generate,
    /// Find a picture of a dish ("image food").
    ImageFood,
    /// Anything else; carries the raw label for logging.
    Unknown(String),
}

impl Intent {
    /// Maps a classifier label to an intent by case-insensitive substring match.
    ///
    /// Keywords are tested in a fixed order and the first hit wins:
    /// "hello" / "about me", then "recommended", then "generate", then "image food".
    /// A label mentioning both "recommended" and "generate" is therefore [`Intent::Recommend`].
    pub fn from_label(label: &str) -> Self {
        let label_lower = label.to_lowercase();
        if label_lower.contains("hello") || label_lower.contains("about me") {
            Intent::AboutMe
        } else if label_lower.contains("recommended") {
            Intent::Recommend
        } else if label_lower.contains("generate") {
            Intent::Generate
        } else if label_lower.contains("image food") {
            Intent::ImageFood
        } else {
            Intent::Unknown(label.trim().to_string())
        }
    }

    /// Task tag reported for results produced under this intent.
    pub fn task(&self) -> TaskKind {
        match self {
            Intent::AboutMe => TaskKind::AboutMe,
            Intent::Recommend => TaskKind::Recommend,
            Intent::Generate => TaskKind::Generate,
            Intent::ImageFood => TaskKind::SearchImage,
            Intent::Unknown(_) => TaskKind::Unknown,
        }
    }
}

/// Task tag of an [`AgentResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    #[serde(rename = "About Me")]
    AboutMe,
    #[serde(rename = "Recommend")]
    Recommend,
    #[serde(rename = "Generate")]
    Generate,
    #[serde(rename = "Search Image")]
    SearchImage,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl TaskKind {
    pub fn label(&self) -> &'static str {
        match self {
            TaskKind::AboutMe => "About Me",
            TaskKind::Recommend => "Recommend",
            TaskKind::Generate => "Generate",
            TaskKind::SearchImage => "Search Image",
            TaskKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A downloaded and decoded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    /// Lower-case format name, e.g. "png" or "jpeg".
    pub format: String,
    pub width: u32,
    pub height: u32,
}

/// Output of a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentOutput {
    Text(String),
    Image(ImagePayload),
    /// Nothing to show (image search found nothing or failed).
    Empty,
}

/// Result record of one routed turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentResult {
    pub output: AgentOutput,
    pub task: TaskKind,
    /// Direct image URL (image search only).
    pub image: Option<String>,
    /// Page the image was found on (image search only).
    pub url: Option<String>,
}

impl AgentResult {
    pub fn text(task: TaskKind, text: impl Into<String>) -> Self {
        Self {
            output: AgentOutput::Text(text.into()),
            task,
            image: None,
            url: None,
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::text(TaskKind::Unknown, message)
    }

    pub fn image(payload: ImagePayload, image_url: String, source_url: Option<String>) -> Self {
        Self {
            output: AgentOutput::Image(payload),
            task: TaskKind::SearchImage,
            image: Some(image_url),
            url: source_url,
        }
    }

    /// Null record of the image search: no output, no links.
    pub fn image_not_found() -> Self {
        Self {
            output: AgentOutput::Empty,
            task: TaskKind::SearchImage,
            image: None,
            url: None,
        }
    }

    pub fn output_text(&self) -> Option<&str> {
        match &self.output {
            AgentOutput::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.task == TaskKind::Unknown
    }
}
