//! # wishbot-telegram
//!
//! Telegram layer: adapters from teloxide updates to core messages, [`wishbot_core::Bot`]
//! implementation with inline keyboards, and the dispatcher runner.
//! Handles only Telegram connectivity; the conversation logic lives behind [`wishbot_core::Handler`].

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{inline_keyboard, TelegramBotAdapter};
pub use runner::run_dispatcher;
