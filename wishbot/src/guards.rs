//! The ordered guards of the conversation. Each one either fully handles an event (`Stop`) or
//! declines (`Continue`); [`crate::engine::ConversationEngine`] registers them in priority order:
//!
//! 1. [`CategoryNameCapture`] – answer to `/add_cat`
//! 2. [`CategorySelection`] – `/cat <name>` button from the `/add_item` picker
//! 3. [`ItemNameCapture`] – item name after a category was chosen
//! 4. [`ItemUrlCapture`] – item link; commits the item
//! 5. [`CommandDispatch`] – exact-match commands

use async_trait::async_trait;
use std::sync::Arc;
use storage::{StorageError, UserStore, WishItem};
use tracing::{debug, info, warn};
use wishbot_core::{Bot, DbotError, Handler, HandlerResponse, Message, Result};

use crate::commands::{is_cancel, parse_category_callback, Command};
use crate::replies;
use crate::session::{PendingCommand, SessionStore};

/// Collaborators shared by every guard.
#[derive(Clone)]
pub struct GuardContext {
    pub store: Arc<dyn UserStore>,
    pub sessions: Arc<dyn SessionStore>,
    pub bot: Arc<dyn Bot>,
}

impl GuardContext {
    pub fn new(
        store: Arc<dyn UserStore>,
        sessions: Arc<dyn SessionStore>,
        bot: Arc<dyn Bot>,
    ) -> Self {
        Self {
            store,
            sessions,
            bot,
        }
    }

    async fn main_menu(&self, user_id: i64, text: &str) -> Result<()> {
        self.bot
            .send_with_buttons(user_id, text, &replies::main_menu())
            .await
    }
}

fn storage_error(e: StorageError) -> DbotError {
    DbotError::Storage(e.to_string())
}

/// Takes (and thereby clears) the pending command on every event. If it was `/add_cat`,
/// the text is the new category name. Must stay first in the chain.
pub struct CategoryNameCapture {
    ctx: GuardContext,
}

impl CategoryNameCapture {
    pub fn new(ctx: GuardContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl Handler for CategoryNameCapture {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let user_id = message.user_id();
        let pending = self.ctx.sessions.take_pending_command(user_id).await;
        if pending != Some(PendingCommand::AddCategory) || is_cancel(&message.text) {
            return Ok(HandlerResponse::Continue);
        }

        let added = self
            .ctx
            .store
            .add_category(user_id, &message.text)
            .await
            .map_err(storage_error)?;
        if !added {
            warn!(user_id, "Category not created: user is not registered");
            self.ctx.bot.send_text(user_id, replies::NOT_REGISTERED).await?;
            return Ok(HandlerResponse::Stop);
        }
        info!(user_id, category = %message.text, "Category created");

        self.ctx.main_menu(user_id, replies::CATEGORY_ADDED).await?;
        Ok(HandlerResponse::Stop)
    }
}

/// `/cat <name>` button: remembers the category and asks for the item name.
pub struct CategorySelection {
    ctx: GuardContext,
}

impl CategorySelection {
    pub fn new(ctx: GuardContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl Handler for CategorySelection {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.is_callback {
            return Ok(HandlerResponse::Continue);
        }
        let Some(category) = parse_category_callback(&message.text) else {
            return Ok(HandlerResponse::Continue);
        };

        let user_id = message.user_id();
        self.ctx
            .sessions
            .update(user_id, &mut |session| {
                session.pending_category = Some(category.to_string());
                session.pending_item_name = None;
            })
            .await;
        debug!(user_id, category = %category, "Category selected");

        self.ctx.bot.send_text(user_id, replies::ASK_ITEM_NAME).await?;
        Ok(HandlerResponse::Stop)
    }
}

/// First text after a category was chosen becomes the item name.
pub struct ItemNameCapture {
    ctx: GuardContext,
}

impl ItemNameCapture {
    pub fn new(ctx: GuardContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl Handler for ItemNameCapture {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.text.is_empty() || is_cancel(&message.text) {
            return Ok(HandlerResponse::Continue);
        }
        let user_id = message.user_id();
        let mut captured = false;
        self.ctx
            .sessions
            .update(user_id, &mut |session| {
                if session.pending_category.is_some() && session.pending_item_name.is_none() {
                    session.pending_item_name = Some(message.text.clone());
                    captured = true;
                }
            })
            .await;
        if !captured {
            return Ok(HandlerResponse::Continue);
        }
        debug!(user_id, item = %message.text, "Item name captured");

        self.ctx.bot.send_text(user_id, replies::ASK_ITEM_URL).await?;
        Ok(HandlerResponse::Stop)
    }
}

/// Text after the item name is its link: the item is committed and the flow ends.
pub struct ItemUrlCapture {
    ctx: GuardContext,
}

impl ItemUrlCapture {
    pub fn new(ctx: GuardContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl Handler for ItemUrlCapture {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if is_cancel(&message.text) {
            return Ok(HandlerResponse::Continue);
        }
        let user_id = message.user_id();
        let mut pending = None;
        self.ctx
            .sessions
            .update(user_id, &mut |session| {
                if session.pending_category.is_some() && session.pending_item_name.is_some() {
                    pending = session
                        .pending_category
                        .take()
                        .zip(session.pending_item_name.take());
                }
            })
            .await;
        let Some((category, name)) = pending else {
            return Ok(HandlerResponse::Continue);
        };

        let item = WishItem::new(name, message.text.clone());
        let added = self
            .ctx
            .store
            .add_item_to_category(user_id, &category, item)
            .await
            .map_err(storage_error)?;
        if !added {
            warn!(user_id, "Item not committed: user is not registered");
            self.ctx.bot.send_text(user_id, replies::NOT_REGISTERED).await?;
            return Ok(HandlerResponse::Stop);
        }
        info!(user_id, category = %category, "Item committed");

        self.ctx.main_menu(user_id, replies::ITEM_ADDED).await?;
        Ok(HandlerResponse::Stop)
    }
}

/// Exact-match commands. Declines anything that is not a known command.
pub struct CommandDispatch {
    ctx: GuardContext,
}

impl CommandDispatch {
    pub fn new(ctx: GuardContext) -> Self {
        Self { ctx }
    }

    async fn start(&self, user_id: i64) -> Result<()> {
        let created = self
            .ctx
            .store
            .register(user_id)
            .await
            .map_err(storage_error)?;
        if created {
            info!(user_id, "New user registered");
        }
        self.ctx.main_menu(user_id, replies::WELCOME).await
    }

    async fn add_category(&self, user_id: i64) -> Result<()> {
        self.set_pending(user_id, PendingCommand::AddCategory).await;
        self.ctx
            .bot
            .send_with_buttons(user_id, replies::ASK_CATEGORY_NAME, &replies::cancel_only())
            .await
    }

    async fn add_item(&self, user_id: i64) -> Result<()> {
        self.set_pending(user_id, PendingCommand::AddItem).await;
        let categories = self
            .ctx
            .store
            .list_categories(user_id)
            .await
            .map_err(storage_error)?;
        self.ctx
            .bot
            .send_with_buttons(
                user_id,
                replies::ASK_CATEGORY_CHOICE,
                &replies::category_picker(&categories),
            )
            .await
    }

    async fn show_categories(&self, user_id: i64) -> Result<()> {
        let rendered = self
            .ctx
            .store
            .list_categories(user_id)
            .await
            .map_err(|e| e.to_string())
            .and_then(|categories| {
                replies::render_categories(&categories).map_err(|e| e.to_string())
            });
        let text = rendered.unwrap_or_else(|e| {
            warn!(user_id, error = %e, "Failed to render categories");
            replies::GENERIC_ERROR.to_string()
        });
        self.ctx.bot.send_text(user_id, &text).await
    }

    async fn show_items(&self, user_id: i64) -> Result<()> {
        let rendered = match self.ctx.store.list_items_by_category(user_id).await {
            Ok(categories) => replies::render_items(&categories).map_err(|e| e.to_string()),
            Err(StorageError::UserNotFound(_)) => Ok(replies::NOT_REGISTERED.to_string()),
            Err(e) => Err(e.to_string()),
        };
        let text = rendered.unwrap_or_else(|e| {
            warn!(user_id, error = %e, "Failed to render items");
            replies::GENERIC_ERROR.to_string()
        });
        self.ctx.bot.send_text(user_id, &text).await
    }

    async fn cancel(&self, user_id: i64) -> Result<()> {
        self.ctx.sessions.clear(user_id).await;
        self.ctx.main_menu(user_id, replies::CANCELLED).await
    }

    async fn set_pending(&self, user_id: i64, command: PendingCommand) {
        self.ctx
            .sessions
            .update(user_id, &mut |session| session.pending_command = Some(command))
            .await;
    }
}

#[async_trait]
impl Handler for CommandDispatch {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Ok(command) = message.text.parse::<Command>() else {
            return Ok(HandlerResponse::Continue);
        };
        let user_id = message.user_id();
        info!(user_id, command = %command, "Dispatching command");

        match command {
            Command::Start => self.start(user_id).await?,
            Command::AddCategory => self.add_category(user_id).await?,
            Command::AddItem => self.add_item(user_id).await?,
            Command::ShowCategories => self.show_categories(user_id).await?,
            Command::ShowItems => self.show_items(user_id).await?,
            Command::Cancel => self.cancel(user_id).await?,
        }
        Ok(HandlerResponse::Stop)
    }
}
