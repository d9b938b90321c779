//! Command handlers.

use std::io::Write;
use std::path::{Path, PathBuf};

use agent::{AgentSystem, ChatHistory};
use anyhow::{Context, Result};
use cookbot_core::{AgentOutput, AgentResult};
use recipe_index::RecipeStore;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

use crate::assembly::{build_agent, load_index};
use crate::config::{AppConfig, CookbotConfig};
use crate::output::{render_result, DEGRADED_MESSAGE};
use crate::session::{load_history, save_history};

/// Runs one turn; returns the text to print and the result, if any.
///
/// Agent errors are logged and replaced by [`DEGRADED_MESSAGE`].
pub async fn respond(
    agent: &AgentSystem,
    input: &str,
    history: &mut ChatHistory,
) -> (String, Option<AgentResult>) {
    match agent.invoke(input, history).await {
        Ok(result) => {
            info!(task = %result.task, "step: reply ready");
            (render_result(&result), Some(result))
        }
        Err(e) => {
            error!(error = %e, "Turn failed");
            (DEGRADED_MESSAGE.to_string(), None)
        }
    }
}

fn open_history(session: Option<&Path>, window: usize) -> Result<ChatHistory> {
    match session {
        Some(path) => load_history(path, window),
        None => Ok(ChatHistory::new(window)),
    }
}

pub async fn handle_ask(
    app: AppConfig,
    query: &str,
    session: Option<PathBuf>,
    save_image: Option<PathBuf>,
) -> Result<()> {
    let window = app.history_window;
    let config = CookbotConfig::load(app)?;
    let agent = build_agent(&config).await?;
    let mut history = open_history(session.as_deref(), window)?;

    let (reply, result) = respond(&agent, query, &mut history).await;
    println!("{reply}");

    if let (Some(path), Some(AgentResult { output: AgentOutput::Image(image), .. })) =
        (save_image.as_deref(), result.as_ref())
    {
        std::fs::write(path, &image.bytes)
            .with_context(|| format!("Write image to {}", path.display()))?;
        println!("Saved to {}", path.display());
    }
    if let Some(path) = session.as_deref() {
        save_history(path, &history)?;
    }
    Ok(())
}

pub async fn handle_chat(app: AppConfig, session: Option<PathBuf>) -> Result<()> {
    let window = app.history_window;
    let config = CookbotConfig::load(app)?;
    let agent = build_agent(&config).await?;
    let mut history = open_history(session.as_deref(), window)?;

    println!("Cooking assistant ready. Ask for a recipe, a new dish or a food picture; `exit` to quit.");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        let (reply, _) = respond(&agent, input, &mut history).await;
        println!("{reply}\n");
        if let Some(path) = session.as_deref() {
            save_history(path, &history)?;
        }
    }
    Ok(())
}

pub async fn handle_list_recipes(app: AppConfig, limit: usize) -> Result<()> {
    let index = load_index(&app.recipe_index_path).await?;
    let total = index.len().await;
    let recipes = index.list(limit).await?;

    if recipes.is_empty() {
        println!("No recipes in {}", app.recipe_index_path);
        return Ok(());
    }
    for (i, doc) in recipes.iter().enumerate() {
        let meta = &doc.metadata;
        println!("{:>3}. {}", i + 1, meta.title);
        if !meta.cuisine.is_empty() || !meta.cook_time.is_empty() {
            println!("     {} | {}", meta.cuisine, meta.cook_time);
        }
        if !meta.link.is_empty() {
            println!("     {}", meta.link);
        }
    }
    println!("Showing {} of {} recipes", recipes.len(), total);
    Ok(())
}
