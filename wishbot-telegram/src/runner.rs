//! Dispatcher runner: converts teloxide messages and callback queries to core messages and passes
//! them to the conversation handler.
//!
//! Updates from one chat are delivered one at a time, so a user's multi-step flows stay ordered.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};
use wishbot_core::{Handler, ToCoreMessage};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};
use super::bot_adapter::TelegramBotAdapter;

/// Starts long polling with the given teloxide Bot; every update is handed to `handler`.
/// Returns after Ctrl-C.
#[instrument(skip(bot, handler))]
pub async fn run_dispatcher(bot: teloxide::Bot, handler: Arc<dyn Handler>) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Connected to Telegram");
        }
    }

    let adapter = Arc::new(TelegramBotAdapter::new(bot.clone()));
    let schema = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback_query));

    Dispatcher::builder(bot, schema)
        .dependencies(dptree::deps![handler, adapter])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}

async fn on_message(msg: teloxide::types::Message, handler: Arc<dyn Handler>) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();

    match msg.text() {
        Some(text) => info!(
            user_id = core_msg.user.id,
            message_content = %text,
            "Received message"
        ),
        None => info!(user_id = core_msg.user.id, "Received non-text message"),
    }

    dispatch(handler.as_ref(), &core_msg).await;
    Ok(())
}

async fn on_callback_query(
    query: CallbackQuery,
    handler: Arc<dyn Handler>,
    adapter: Arc<TelegramBotAdapter>,
) -> ResponseResult<()> {
    let core_msg = TelegramCallbackWrapper(&query).to_core();
    info!(
        user_id = core_msg.user.id,
        payload = %core_msg.text,
        "Received callback query"
    );

    if let Err(e) = adapter.acknowledge_callback(&query).await {
        warn!(error = %e, user_id = core_msg.user.id, "Failed to acknowledge callback, dropping it");
        return Ok(());
    }

    dispatch(handler.as_ref(), &core_msg).await;
    Ok(())
}

/// Runs the handler; failures are logged and end processing of this one update only.
async fn dispatch(handler: &dyn Handler, message: &wishbot_core::Message) {
    if let Err(e) = handler.handle(message).await {
        error!(error = %e, user_id = message.user.id, "Handler failed");
    }
}
