//! Renders core [`Card`]s as Telegram HTML.

use extbot_core::{Card, CardLine};
use teloxide::utils::html;

/// Telegram rejects photo captions longer than this (in characters, after entity parsing).
pub const CAPTION_LIMIT: usize = 1024;

/// Bold title followed by one line per card line. All user-provided text is escaped.
pub fn card_html(card: &Card) -> String {
    let mut out = html::bold(&html::escape(&card.title));
    for line in &card.lines {
        out.push('\n');
        match line {
            CardLine::Field { label, value } => {
                out.push_str(&html::bold(&format!("{}:", html::escape(label))));
                out.push(' ');
                out.push_str(&html::escape(value));
            }
            CardLine::Link { label, url } => {
                let anchor = format!(
                    "<a href=\"{}\">{}</a>",
                    html::escape(url).replace('"', "&quot;"),
                    html::escape(label)
                );
                out.push_str(&html::bold(&anchor));
            }
        }
    }
    out
}

/// Whether the rendered card fits in a photo caption. Counts visible text only roughly (tags included),
/// which errs on the side of sending a plain message.
pub fn fits_caption(rendered: &str) -> bool {
    rendered.chars().count() <= CAPTION_LIMIT
}
