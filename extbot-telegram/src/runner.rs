//! REPL runner: syncs the slash command list, then converts each teloxide message to core::Message and
//! passes it to the HandlerChain.

use anyhow::Result;
use extbot_core::ToCoreMessage;
use handler_chain::HandlerChain;
use search_handlers::{PING_COMMAND, PING_DESCRIPTION};
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Slash commands advertised in the platform's command menu.
pub fn slash_commands() -> Vec<BotCommand> {
    vec![BotCommand::new(PING_COMMAND, PING_DESCRIPTION)]
}

/// Registers the slash commands once and logs the bot identity. Failures are logged, not fatal.
#[instrument(skip(bot))]
pub async fn sync_commands(bot: &teloxide::Bot) {
    match bot.set_my_commands(slash_commands()).await {
        Ok(_) => info!("Slash commands synced"),
        Err(e) => warn!(error = %e, "Failed to sync slash commands"),
    }

    match bot.get_me().await {
        Ok(me) => info!(
            username = %me.user.username.as_deref().unwrap_or("unknown"),
            id = me.user.id.0,
            "Bot connected"
        ),
        Err(e) => warn!(error = %e, "getMe failed"),
    }
}

/// Starts the REPL with the given teloxide Bot and HandlerChain. Each message runs the chain in its own
/// task so a slow search never blocks other chats.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    sync_commands(&bot).await;

    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            if msg.text().is_none() {
                return Ok(());
            }
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            tokio::spawn(async move {
                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    message_id = %core_msg.id,
                    "step: processing message (handler chain started)"
                );
                if let Err(e) = chain.handle(&core_msg).await {
                    error!(error = %e, user_id = core_msg.user.id, "Handler chain failed");
                }
            });

            Ok(())
        }
    })
    .await;

    Ok(())
}
