//! Rich reply card: a title, a few body lines and an optional thumbnail.
//!
//! Transports decide how to render it (Telegram uses HTML captions); [`Card::markdown_body`] gives the
//! canonical markdown form of the body.

use serde::{Deserialize, Serialize};

/// One line of a card body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardLine {
    /// Bold label followed by a plain value, e.g. `Published by: Microsoft`.
    Field { label: String, value: String },
    /// Hyperlink with a visible label.
    Link { label: String, url: String },
}

/// Outbound rich message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub lines: Vec<CardLine>,
    pub thumbnail_url: Option<String>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
            thumbnail_url: None,
        }
    }

    pub fn field(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.lines.push(CardLine::Field {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    pub fn link(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.lines.push(CardLine::Link {
            label: label.into(),
            url: url.into(),
        });
        self
    }

    pub fn thumbnail(mut self, url: Option<String>) -> Self {
        self.thumbnail_url = url;
        self
    }

    /// Body rendered as markdown, one line per [`CardLine`].
    pub fn markdown_body(&self) -> String {
        self.lines
            .iter()
            .map(|line| match line {
                CardLine::Field { label, value } => format!("**{}:** {}", label, value),
                CardLine::Link { label, url } => format!("**[{}]({})**", label, url),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
