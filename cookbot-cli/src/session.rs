//! Conversation history persisted as a JSON array of chat turns.

use std::fs;
use std::path::Path;

use agent::ChatHistory;
use anyhow::{Context, Result};
use cookbot_core::ChatTurn;
use tracing::info;

/// Loads the history stored at `path`; a missing file is an empty history.
pub fn load_history(path: &Path, window: usize) -> Result<ChatHistory> {
    if !path.exists() {
        info!(path = %path.display(), "No session file yet, starting empty history");
        return Ok(ChatHistory::new(window));
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Read session file {}", path.display()))?;
    let turns: Vec<ChatTurn> = serde_json::from_str(&raw)
        .with_context(|| format!("Parse session file {}", path.display()))?;
    info!(path = %path.display(), turns = turns.len(), "Session loaded");
    Ok(ChatHistory::from_turns(turns, window))
}

/// Writes `history` to `path`, creating parent directories.
pub fn save_history(path: &Path, history: &ChatHistory) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(history.turns())?;
    fs::write(path, json).with_context(|| format!("Write session file {}", path.display()))?;
    Ok(())
}
