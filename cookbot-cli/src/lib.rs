//! # cookbot-cli
//!
//! The `cookbot` binary: argument parsing, env config, assembly of the assistant, session
//! files and terminal output.

pub mod assembly;
pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod session;

pub use cli::{Cli, Commands};
pub use config::{AppConfig, CookbotConfig};
