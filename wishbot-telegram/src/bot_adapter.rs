//! Wraps teloxide::Bot and implements [`wishbot_core::Bot`]. Production code sends messages via Telegram;
//! tests substitute another Bot impl.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup};
use tracing::debug;
use wishbot_core::{Bot as CoreBot, ButtonRow, DbotError, Result};

/// Renders core button rows as a Telegram inline keyboard of callback buttons.
pub fn inline_keyboard(rows: &[ButtonRow]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(rows.iter().map(|row| {
        row.iter()
            .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.payload.clone()))
            .collect::<Vec<_>>()
    }))
}

/// Thin wrapper around teloxide::Bot that implements wishbot-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Answers the callback query so the client stops its spinner, then strips the inline keyboard
    /// from the message the button belonged to so it cannot be pressed twice.
    pub async fn acknowledge_callback(&self, query: &CallbackQuery) -> Result<()> {
        self.bot
            .answer_callback_query(query.id.clone())
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;

        if let Some(message) = &query.message {
            self.bot
                .edit_message_reply_markup(message.chat().id, message.id())
                .await
                .map_err(|e| DbotError::Bot(e.to_string()))?;
            debug!(chat_id = message.chat().id.0, "Inline keyboard removed");
        }
        Ok(())
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_text(&self, user_id: i64, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(user_id), text.to_string())
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_with_buttons(&self, user_id: i64, text: &str, rows: &[ButtonRow]) -> Result<()> {
        self.bot
            .send_message(ChatId(user_id), text.to_string())
            .reply_markup(inline_keyboard(rows))
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
