//! Logs each inbound message and the outcome of the chain.

use async_trait::async_trait;
use extbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

/// Logs each message in before() and the chain response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        debug!(
            message_id = %message.id,
            response = ?response,
            "Processed message"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extbot_core::{Chat, User};

    fn message() -> Message {
        Message {
            id: "1".to_string(),
            user: User::anonymous(),
            chat: Chat {
                id: 7,
                chat_type: "private".to_string(),
            },
            content: "!ext rust".to_string(),
            created_at: chrono::Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_logging_handler_never_interferes() {
        let handler = LoggingHandler;
        let msg = message();

        assert!(handler.before(&msg).await.unwrap());
        assert_eq!(handler.handle(&msg).await.unwrap(), HandlerResponse::Continue);
        handler.after(&msg, &HandlerResponse::Stop).await.unwrap();
    }
}
