//! Composition root: config → tracing → clients → handler chain → REPL.

use anyhow::{Context, Result};
use extbot_core::{init_tracing, Bot as CoreBot};
use handler_chain::HandlerChain;
use marketplace_client::MarketplaceClient;
use middleware::LoggingHandler;
use search_handlers::{PingHandler, SearchHandler};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::bot_adapter::TelegramBotAdapter;
use crate::config::BotConfig;
use crate::runner::run_repl;

/// Handler order: logging wraps everything, then the health check, then search.
pub fn build_handler_chain(config: &BotConfig, bot: Arc<dyn CoreBot>) -> HandlerChain {
    let client = MarketplaceClient::new(config.marketplace_api_url.clone());
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(PingHandler::new(bot.clone())))
        .add_handler(Arc::new(
            SearchHandler::new(client, bot).with_result_limit(config.result_limit),
        ))
}

/// Creates the teloxide client, honoring a custom Bot API server URL.
pub fn build_teloxide_bot(config: &BotConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url.as_deref() {
        Some(url) => {
            let url = reqwest::Url::parse(url).context("Parse TELEGRAM_API_URL")?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Main entry: init logging, load and validate config, wire handlers, then run the REPL.
/// A missing token is logged and returned before any connection is attempted.
pub async fn run_bot(token: Option<String>) -> Result<()> {
    init_tracing(&BotConfig::log_file_from_env())?;

    let config = match BotConfig::load(token).and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration, not starting");
            return Err(e);
        }
    };

    start(config).await
}

#[instrument(skip(config))]
async fn start(config: BotConfig) -> Result<()> {
    info!(
        marketplace_api_url = %config.marketplace_api_url,
        result_limit = config.result_limit.get(),
        "Initializing bot"
    );

    let teloxide_bot = build_teloxide_bot(&config)?;
    let core_bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler_chain = build_handler_chain(&config, core_bot);

    info!("Bot started successfully");
    run_repl(teloxide_bot, handler_chain).await
}
