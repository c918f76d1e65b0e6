//! Adapters from Telegram (teloxide) types to wishbot_core types.
//! Depends only on teloxide and wishbot_core type definitions.

use wishbot_core::{Message, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to a plain-text core [`Message`].
/// Non-text messages become empty text.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or(User {
                    id: self.0.chat.id.0,
                    username: None,
                }),
            text: self.0.text().unwrap_or("").to_string(),
            is_callback: false,
            callback_id: None,
        }
    }
}

/// Wraps a teloxide CallbackQuery (inline button press) for conversion to a callback core [`Message`].
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreMessage for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Message {
        Message {
            user: TelegramUserWrapper(&self.0.from).to_core(),
            text: self.0.data.clone().unwrap_or_default(),
            is_callback: true,
            callback_id: Some(self.0.id.to_string()),
        }
    }
}
