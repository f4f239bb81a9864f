//! Bot abstraction for outbound messages.
//!
//! [`Bot`] is transport-agnostic; extbot-telegram implements it via teloxide and tests substitute
//! recording fakes.

use crate::card::Card;
use crate::error::Result;
use crate::types::Chat;
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a rich card (title, body lines, optional thumbnail) as one message.
    async fn send_card(&self, chat: &Chat, card: &Card) -> Result<()>;
    /// Shows the "typing" indicator in the chat. Transports expire it after a few seconds.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;
}
