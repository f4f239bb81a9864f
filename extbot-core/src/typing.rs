//! Keeps the chat's "typing" indicator alive while a slow operation runs.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::bot::Bot;
use crate::types::Chat;

/// Telegram clears the chat action after 5 seconds; refresh a little earlier.
pub const TYPING_REFRESH_INTERVAL: Duration = Duration::from_secs(4);

/// Guard that re-sends the typing action until dropped.
///
/// Must be created inside a tokio runtime.
pub struct TypingIndicator {
    task: JoinHandle<()>,
}

impl TypingIndicator {
    /// Sends the first typing action immediately, then every [`TYPING_REFRESH_INTERVAL`].
    pub fn start(bot: Arc<dyn Bot>, chat: Chat) -> Self {
        Self::with_interval(bot, chat, TYPING_REFRESH_INTERVAL)
    }

    pub fn with_interval(bot: Arc<dyn Bot>, chat: Chat, period: Duration) -> Self {
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                if let Err(e) = bot.send_typing(&chat).await {
                    debug!(error = %e, chat_id = chat.id, "Failed to send typing action");
                }
            }
        });
        Self { task }
    }

    /// Stops refreshing. Equivalent to dropping the guard.
    pub fn stop(self) {}
}

impl Drop for TypingIndicator {
    fn drop(&mut self) {
        self.task.abort();
    }
}
