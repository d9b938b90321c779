//! cookbot CLI: ask the cooking assistant, chat with it, list indexed recipes. Config from env
//! (`.env` is loaded first).

use anyhow::Result;
use clap::Parser;
use cookbot_cli::commands::{handle_ask, handle_chat, handle_list_recipes};
use cookbot_cli::{AppConfig, Cli, Commands};
use cookbot_core::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let app = AppConfig::from_env()?;
    init_tracing(&app.log_file)?;

    match cli.command {
        Commands::Ask {
            query,
            session,
            save_image,
        } => handle_ask(app, &query, session, save_image).await,
        Commands::Chat { session } => handle_chat(app, session).await,
        Commands::ListRecipes { limit } => handle_list_recipes(app, limit).await,
    }
}
