//! # Handler chain
//!
//! Runs an ordered list of handlers for each message. Each handler either fully handles the
//! message (`Stop`) and the chain ends there, or declines (`Continue`) and the next one runs.
//! Registration order is priority order.

use std::sync::Arc;
use tracing::{debug, info, instrument};
use wishbot_core::{Handler, HandlerResponse, Message, Result};

/// Ordered chain of handlers; the first one returning `Stop` wins.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler with the lowest priority so far.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Short names of the registered handlers, in priority order.
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers
            .iter()
            .map(|h| short_type_name(h.name()))
            .collect()
    }

    /// Runs handlers in order until one returns `Stop`. Returns `Continue` if every handler declined.
    /// A handler error aborts the chain and is returned as is.
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        for handler in &self.handlers {
            let handler_name = short_type_name(handler.name());
            let response = handler.handle(message).await?;
            debug!(handler = %handler_name, response = ?response, "Handler processed");

            if response == HandlerResponse::Stop {
                info!(
                    user_id = message.user.id,
                    handler = %handler_name,
                    "step: handler chain stopped by handler"
                );
                return Ok(HandlerResponse::Stop);
            }
        }

        debug!(user_id = message.user.id, "step: every handler declined");
        Ok(HandlerResponse::Continue)
    }
}

/// `wishbot::guards::CommandDispatch` -> `CommandDispatch`.
fn short_type_name(full: &'static str) -> &'static str {
    full.rsplit("::").next().unwrap_or(full)
}
