//! Bot configuration loaded from the environment (after `.env` is applied), with an optional
//! YAML file as the last source for the token.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::Path;
use wishbot_core::LogFormat;

/// Used when WISHBOT_CONFIG_PATH is unset; a missing file at this path is not an error.
pub const DEFAULT_CONFIG_PATH: &str = "./config.yml";

/// Contents of the optional config file.
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub token: Option<String>,
}

impl FileConfig {
    /// Reads WISHBOT_CONFIG_PATH (or [`DEFAULT_CONFIG_PATH`]). An explicitly configured path must exist.
    pub fn load() -> Result<Self> {
        match env::var("WISHBOT_CONFIG_PATH") {
            Ok(path) => Self::from_path(Path::new(&path)),
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_path(Path::new(DEFAULT_CONFIG_PATH))
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Can't read config file {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// `--token`, then BOT_TOKEN, then `token` from the config file
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
    /// APP_ENV: `local` -> text logs, `prod` -> JSON logs
    pub log_format: LogFormat,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided; the config
    /// file is only read when neither is set.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token.or_else(|| env::var("BOT_TOKEN").ok()) {
            Some(token) => token,
            None => FileConfig::load()?.token.ok_or_else(|| {
                anyhow::anyhow!("BOT_TOKEN not set and no token in the config file")
            })?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/wishbot.log".to_string());
        let log_format = env::var("APP_ENV")
            .unwrap_or_default()
            .parse::<LogFormat>()?;

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            log_format,
        })
    }

    /// Validate config: non-empty token, parsable API URL if set.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Parsed custom Bot API URL, if configured.
    pub fn api_url(&self) -> Result<Option<reqwest::Url>> {
        self.telegram_api_url
            .as_deref()
            .map(reqwest::Url::parse)
            .transpose()
            .map_err(Into::into)
    }
}
