use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use storage::InMemoryUserStore;
use tracing::{info, instrument};
use wishbot_core::init_tracing;
use wishbot_telegram::{run_dispatcher, TelegramBotAdapter};

use crate::config::BotConfig;
use crate::engine::ConversationEngine;
use crate::session::InMemorySessionStore;

/// Builds the teloxide Bot, honouring a custom Bot API URL.
pub fn build_teloxide_bot(config: &BotConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    Ok(match config.api_url()? {
        Some(url) => bot.set_api_url(url),
        None => bot,
    })
}

/// Engine over fresh in-memory stores, sending through `bot`.
pub fn build_engine(bot: Arc<dyn wishbot_core::Bot>) -> ConversationEngine {
    ConversationEngine::new(
        Arc::new(InMemoryUserStore::new()),
        Arc::new(InMemorySessionStore::new()),
        bot,
    )
}

/// Main entry: validate config, init logging, build the engine, then poll Telegram until Ctrl-C.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    if let Some(dir) = Path::new(&config.log_file).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    init_tracing(&config.log_file, config.log_format)?;

    info!(
        log_file = %config.log_file,
        log_format = ?config.log_format,
        custom_api_url = config.telegram_api_url.is_some(),
        "Initializing bot"
    );

    let teloxide_bot = build_teloxide_bot(&config)?;
    let sender = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let engine = Arc::new(build_engine(sender));

    info!("Bot started successfully");
    run_dispatcher(teloxide_bot, engine).await
}
