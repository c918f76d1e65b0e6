//! Outbound side of the bot: sending plain text and messages with inline buttons.
//!
//! [`Bot`] is transport-agnostic; wishbot-telegram implements it via teloxide and tests substitute a recorder.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Inline button: what the user sees and what comes back as callback payload when pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    pub payload: String,
}

impl Button {
    pub fn new(label: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            payload: payload.into(),
        }
    }
}

/// Buttons rendered left-to-right on one row. A keyboard is a slice of rows, top-to-bottom.
pub type ButtonRow = Vec<Button>;

/// Abstraction for sending messages to a user. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the user's private chat.
    async fn send_text(&self, user_id: i64, text: &str) -> Result<()>;
    /// Sends a text message with an inline keyboard attached.
    async fn send_with_buttons(&self, user_id: i64, text: &str, rows: &[ButtonRow]) -> Result<()>;
}
