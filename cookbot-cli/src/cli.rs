//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cookbot")]
#[command(about = "Cooking assistant: recommend recipes, invent dishes, find food pictures", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer one query and exit.
    Ask {
        query: String,
        /// JSON file holding the conversation history; created if missing.
        #[arg(short, long)]
        session: Option<PathBuf>,
        /// Write a found picture to this file.
        #[arg(long)]
        save_image: Option<PathBuf>,
    },
    /// Interactive conversation on stdin; `exit` or EOF ends it.
    Chat {
        #[arg(short, long)]
        session: Option<PathBuf>,
    },
    /// Print recipes from the index snapshot.
    ListRecipes {
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}
