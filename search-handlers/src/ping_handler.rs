//! `/ping` health check: one fixed reply, no inputs, no failure modes.

use async_trait::async_trait;
use extbot_core::{
    parse_command, Bot as CoreBot, Handler, HandlerResponse, Message, Result,
    SLASH_COMMAND_PREFIX,
};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::messages::MSG_PONG;

pub const PING_COMMAND: &str = "ping";
/// Shown next to the command in the platform's command menu.
pub const PING_DESCRIPTION: &str = "Check that the bot is alive";

pub struct PingHandler {
    bot: Arc<dyn CoreBot>,
}

impl PingHandler {
    pub fn new(bot: Arc<dyn CoreBot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for PingHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match parse_command(&message.content, SLASH_COMMAND_PREFIX) {
            Some(cmd) if cmd.is(PING_COMMAND) => {}
            _ => return Ok(HandlerResponse::Continue),
        }

        info!(user_id = message.user.id, chat_id = message.chat.id, "Ping received");
        if let Err(e) = self.bot.send_message(&message.chat, MSG_PONG).await {
            error!(error = %e, chat_id = message.chat.id, "Failed to send ping reply");
        }
        Ok(HandlerResponse::Stop)
    }
}
