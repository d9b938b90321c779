//! Bounded conversation history.

use cookbot_core::ChatTurn;

/// Number of turns kept when no window is configured.
pub const DEFAULT_HISTORY_WINDOW: usize = 6;

/// Sliding window over the most recent [`ChatTurn`]s.
///
/// Owned by the caller and passed into each invocation; holds at most `window` turns, dropping
/// the oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatHistory {
    turns: Vec<ChatTurn>,
    window: usize,
}

impl Default for ChatHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_WINDOW)
    }
}

impl ChatHistory {
    pub fn new(window: usize) -> Self {
        Self {
            turns: Vec::new(),
            window,
        }
    }

    /// Restores a saved history, keeping only the last `window` turns.
    pub fn from_turns(turns: Vec<ChatTurn>, window: usize) -> Self {
        let mut history = Self { turns, window };
        history.truncate();
        history
    }

    /// Appends a turn and drops the oldest ones beyond the window.
    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
        self.truncate();
    }

    fn truncate(&mut self) {
        if self.turns.len() > self.window {
            let excess = self.turns.len() - self.window;
            self.turns.drain(..excess);
        }
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn into_turns(self) -> Vec<ChatTurn> {
        self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// One "Speaker: text" line per turn, oldest first; empty string for no history.
    pub fn render_for_prompt(&self) -> String {
        self.turns
            .iter()
            .map(ChatTurn::to_prompt_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
