//! Conversation engine: runs one inbound event through the guard chain and falls back to
//! "unknown command" when every guard declines.

use async_trait::async_trait;
use handler_chain::HandlerChain;
use std::sync::Arc;
use storage::UserStore;
use tracing::{info, instrument};
use wishbot_core::{Bot, Handler, HandlerResponse, Message, Result};

use crate::guards::{
    CategoryNameCapture, CategorySelection, CommandDispatch, GuardContext, ItemNameCapture,
    ItemUrlCapture,
};
use crate::replies;
use crate::session::SessionStore;

/// What happened to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A guard handled it.
    Handled,
    /// No guard matched; the "unknown command" reply was sent.
    Unrecognized,
}

pub struct ConversationEngine {
    chain: HandlerChain,
    bot: Arc<dyn Bot>,
}

impl ConversationEngine {
    /// Builds the guard chain over the given collaborators.
    pub fn new(
        store: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
        bot: Arc<dyn Bot>,
    ) -> Self {
        let ctx = GuardContext::new(store, sessions, bot.clone());
        let chain = HandlerChain::new()
            .add_handler(Arc::new(CategoryNameCapture::new(ctx.clone())))
            .add_handler(Arc::new(CategorySelection::new(ctx.clone())))
            .add_handler(Arc::new(ItemNameCapture::new(ctx.clone())))
            .add_handler(Arc::new(ItemUrlCapture::new(ctx.clone())))
            .add_handler(Arc::new(CommandDispatch::new(ctx)));
        Self { chain, bot }
    }

    /// Guard names in the order they see each event.
    pub fn guard_names(&self) -> Vec<&'static str> {
        self.chain.handler_names()
    }

    /// Processes one event to completion. Send failures are returned; the caller decides how to report them.
    #[instrument(skip(self, message), fields(user_id = message.user.id, is_callback = message.is_callback))]
    pub async fn on_message(&self, message: &Message) -> Result<Outcome> {
        match self.chain.handle(message).await? {
            HandlerResponse::Stop => Ok(Outcome::Handled),
            HandlerResponse::Continue => {
                info!(user_id = message.user.id, text = %message.text, "Unknown command");
                self.bot
                    .send_text(message.user.id, replies::UNKNOWN_COMMAND)
                    .await?;
                Ok(Outcome::Unrecognized)
            }
        }
    }
}

#[async_trait]
impl Handler for ConversationEngine {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        self.on_message(message).await?;
        Ok(HandlerResponse::Stop)
    }
}
