//! # wishbot-core
//!
//! Core types and traits for the wishlist bot: [`Bot`], [`Handler`], the inbound [`Message`] event,
//! inline button layout, and tracing initialization. Transport-agnostic; used by wishbot-telegram,
//! handler-chain and the wishbot application.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, Button, ButtonRow};
pub use error::{DbotError, Result};
pub use logger::{init_tracing, LogFormat};
pub use types::{Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
