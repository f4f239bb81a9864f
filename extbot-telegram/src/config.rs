//! Bot config loaded from env: BOT_TOKEN (required), TELEGRAM_API_URL (or TELOXIDE_API_URL),
//! MARKETPLACE_API_URL, SEARCH_RESULT_LIMIT, LOG_FILE.

use anyhow::Result;
use extbot_core::BotError;
use marketplace_client::DEFAULT_MARKETPLACE_API_URL;
use search_handlers::DEFAULT_RESULT_LIMIT;
use std::env;
use std::num::NonZeroU32;

pub const DEFAULT_LOG_FILE: &str = "logs/extbot.log";

/// Runtime configuration, read once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// MARKETPLACE_API_URL; the public gallery endpoint by default
    pub marketplace_api_url: String,
    /// SEARCH_RESULT_LIMIT; extensions shown per search
    pub result_limit: NonZeroU32,
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides BOT_TOKEN if provided.
    /// A missing token is a [`BotError::Config`].
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token.or_else(|| env::var("BOT_TOKEN").ok()) {
            Some(t) if !t.trim().is_empty() => t,
            _ => {
                return Err(BotError::Config(
                    "BOT_TOKEN not set; add it to .env or pass --token".to_string(),
                )
                .into())
            }
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let marketplace_api_url = env::var("MARKETPLACE_API_URL")
            .unwrap_or_else(|_| DEFAULT_MARKETPLACE_API_URL.to_string());
        let result_limit = match env::var("SEARCH_RESULT_LIMIT") {
            Ok(raw) => raw.trim().parse::<NonZeroU32>().map_err(|_| {
                BotError::Config(format!(
                    "SEARCH_RESULT_LIMIT must be a positive integer, got {:?}",
                    raw
                ))
            })?,
            Err(_) => DEFAULT_RESULT_LIMIT,
        };

        Ok(Self {
            bot_token,
            telegram_api_url,
            marketplace_api_url,
            result_limit,
        })
    }

    /// LOG_FILE or the default; available before the rest of the config so startup errors get logged.
    pub fn log_file_from_env() -> String {
        env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string())
    }

    /// Builds config with the given token; other fields default.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            marketplace_api_url: DEFAULT_MARKETPLACE_API_URL.to_string(),
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Validates URLs. Call after load() to fail fast before connecting.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if reqwest::Url::parse(&self.marketplace_api_url).is_err() {
            anyhow::bail!(
                "MARKETPLACE_API_URL is not a valid URL: {}",
                self.marketplace_api_url
            );
        }
        Ok(())
    }
}
