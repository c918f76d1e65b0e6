//! Core types: user, inbound message event, handler response, and Handler trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Sender identity. `id` doubles as the private chat id replies are sent to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
}

/// One inbound event: either free text typed by the user or the payload of a pressed inline button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub user: User,
    /// Message text, or the button payload when `is_callback` is set.
    pub text: String,
    pub is_callback: bool,
    /// Correlation token of the callback query; `None` for plain messages.
    pub callback_id: Option<String>,
}

impl Message {
    /// Plain text message from `user_id`.
    pub fn text(user_id: i64, text: impl Into<String>) -> Self {
        Self {
            user: User {
                id: user_id,
                username: None,
            },
            text: text.into(),
            is_callback: false,
            callback_id: None,
        }
    }

    /// Button press from `user_id` carrying `payload`.
    pub fn callback(
        user_id: i64,
        payload: impl Into<String>,
        callback_id: impl Into<String>,
    ) -> Self {
        Self {
            user: User {
                id: user_id,
                username: None,
            },
            text: payload.into(),
            is_callback: true,
            callback_id: Some(callback_id.into()),
        }
    }

    pub fn user_id(&self) -> i64 {
        self.user.id
    }
}

/// Handler result for the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Declined; pass to next handler.
    Continue,
    /// Fully handled; stop the chain.
    Stop,
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific update type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// One step of an ordered chain. Either handles the message and returns `Stop`, or declines with `Continue`.
#[async_trait]
pub trait Handler: Send + Sync {
    async fn handle(&self, message: &Message) -> crate::error::Result<HandlerResponse>;

    /// Type name of the implementor, resolved through the vtable so it names the concrete handler
    /// even behind `dyn Handler`.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
