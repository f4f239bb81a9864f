//! Wraps teloxide::Bot and implements [`extbot_core::Bot`]. Production code sends messages via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use extbot_core::{Bot as CoreBot, BotError, Card, Chat, Result};
use teloxide::{
    prelude::*,
    types::{ChatAction, ChatId, InputFile, ParseMode},
};
use tracing::warn;

use crate::render::{card_html, fits_caption};

/// Thin wrapper around teloxide::Bot that implements extbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    async fn send_html(&self, chat: &Chat, html: String) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), html)
            .parse_mode(ParseMode::Html)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_photo_card(&self, chat: &Chat, photo_url: &str, caption: &str) -> Result<()> {
        let url = reqwest::Url::parse(photo_url)
            .map_err(|e| BotError::Bot(format!("Invalid thumbnail url {}: {}", photo_url, e)))?;
        self.bot
            .send_photo(ChatId(chat.id), InputFile::url(url))
            .caption(caption)
            .parse_mode(ParseMode::Html)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }

    /// Photo with an HTML caption when there is a thumbnail; a plain HTML message otherwise or when
    /// Telegram refuses the photo.
    async fn send_card(&self, chat: &Chat, card: &Card) -> Result<()> {
        let html = card_html(card);
        if let Some(photo_url) = card.thumbnail_url.as_deref() {
            if fits_caption(&html) {
                match self.send_photo_card(chat, photo_url, &html).await {
                    Ok(()) => return Ok(()),
                    Err(e) => {
                        warn!(error = %e, chat_id = chat.id, photo_url = %photo_url, "Photo card rejected, sending as text");
                    }
                }
            }
        }
        self.send_html(chat, html).await
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat.id), ChatAction::Typing)
            .await
            .map_err(|e| BotError::Bot(e.to_string()))?;
        Ok(())
    }
}
