//! # Wishlist bot
//!
//! A Telegram bot that keeps a categorized wishlist per user. Conversation flow is an ordered
//! chain of guards ([`guards`]) over a per-user [`session`] and a [`storage::UserStore`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod guards;
pub mod replies;
pub mod runner;
pub mod session;

pub use cli::{Cli, Commands};
pub use commands::Command;
pub use config::{BotConfig, FileConfig};
pub use engine::{ConversationEngine, Outcome};
pub use guards::GuardContext;
pub use runner::{build_engine, run_bot};
pub use session::{InMemorySessionStore, PendingCommand, Session, SessionStore};
