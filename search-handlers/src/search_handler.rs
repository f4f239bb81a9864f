//! `!ext <query>` handler: searches the marketplace and replies with a header and one card per result.

use async_trait::async_trait;
use extbot_core::{
    parse_command, Bot as CoreBot, Handler, HandlerResponse, Message, Result, TypingIndicator,
    TEXT_COMMAND_PREFIX,
};
use marketplace_client::{ExtensionResult, MarketplaceClient, MarketplaceError};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::cards::extension_card;
use crate::messages::{self, MSG_UNEXPECTED, MSG_USAGE};

pub const SEARCH_COMMAND: &str = "ext";

pub const DEFAULT_RESULT_LIMIT: NonZeroU32 = match NonZeroU32::new(3) {
    Some(n) => n,
    None => unreachable!(),
};

/// Marketplace search handler.
///
/// Claims every `!ext` message (returns Stop) and reports all failures to the user itself, so
/// nothing propagates to the chain. Other messages pass through with Continue.
pub struct SearchHandler {
    client: MarketplaceClient,
    bot: Arc<dyn CoreBot>,
    result_limit: NonZeroU32,
}

impl SearchHandler {
    pub fn new(client: MarketplaceClient, bot: Arc<dyn CoreBot>) -> Self {
        Self {
            client,
            bot,
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }

    pub fn with_result_limit(mut self, result_limit: NonZeroU32) -> Self {
        self.result_limit = result_limit;
        self
    }

    /// Runs the search with the typing indicator shown, then emits the replies.
    async fn search_and_reply(&self, message: &Message, query: &str) -> Result<()> {
        let typing = TypingIndicator::start(self.bot.clone(), message.chat.clone());
        let outcome = self.client.search(query, self.result_limit).await;
        typing.stop();

        match outcome {
            Ok(extensions) if extensions.is_empty() => {
                info!(query = %query, "No extensions found");
                self.bot
                    .send_message(&message.chat, &messages::no_results(query))
                    .await
            }
            Ok(extensions) => self.send_results(message, query, &extensions).await,
            Err(MarketplaceError::Status { status, body }) => {
                error!(status, response_body = %body, "Marketplace returned an error status");
                self.bot
                    .send_message(&message.chat, &messages::http_error(status))
                    .await
            }
            Err(e) => {
                error!(error = %e, "Unexpected error during marketplace search");
                self.bot.send_message(&message.chat, MSG_UNEXPECTED).await
            }
        }
    }

    async fn send_results(
        &self,
        message: &Message,
        query: &str,
        extensions: &[ExtensionResult],
    ) -> Result<()> {
        info!(
            query = %query,
            count = extensions.len(),
            "Search succeeded, sending one card per extension"
        );
        self.bot
            .send_message(&message.chat, &messages::results_header(query))
            .await?;
        for ext in extensions {
            self.bot
                .send_card(&message.chat, &extension_card(ext))
                .await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Handler for SearchHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let query = match parse_command(&message.content, TEXT_COMMAND_PREFIX) {
            Some(cmd) if cmd.is(SEARCH_COMMAND) => cmd.args.trim(),
            _ => return Ok(HandlerResponse::Continue),
        };

        if query.is_empty() {
            if let Err(e) = self.bot.send_message(&message.chat, MSG_USAGE).await {
                warn!(error = %e, chat_id = message.chat.id, "Failed to send usage hint");
            }
            return Ok(HandlerResponse::Stop);
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            query = %query,
            "Starting marketplace search"
        );

        if let Err(e) = self.search_and_reply(message, query).await {
            error!(error = %e, chat_id = message.chat.id, "Failed to deliver search replies");
        }
        Ok(HandlerResponse::Stop)
    }
}
