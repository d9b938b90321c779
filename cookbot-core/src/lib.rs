//! # cookbot-core
//!
//! Core types shared by the cooking assistant crates: [`ChatTurn`] for conversational memory,
//! [`Intent`] and [`TaskKind`] for routing, [`AgentResult`] for strategy output, the
//! [`CookbotError`] type, and tracing initialization. Transport-agnostic; used by `agent`
//! and `cookbot-cli`.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{CookbotError, Result};
pub use logger::init_tracing;
pub use types::{
    AgentOutput, AgentResult, ChatTurn, ImagePayload, Intent, TaskKind, TurnContent, TurnRole,
};
