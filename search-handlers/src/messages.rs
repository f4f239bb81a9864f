//! User-facing reply texts.

pub const MSG_USAGE: &str = "⚠️ You need to tell me what to search for!\nFor example: !ext python";
pub const MSG_UNEXPECTED: &str = "An unexpected error occurred while processing your request.";
pub const MSG_PONG: &str = "Pong! 🏓 I'm an active bot.";

pub const CARD_PUBLISHER_LABEL: &str = "Published by";
pub const CARD_LINK_LABEL: &str = "View on Marketplace";

pub fn results_header(query: &str) -> String {
    format!("--- 🔎 Results for: \"{}\" ---", query)
}

pub fn no_results(query: &str) -> String {
    format!("😥 No extensions found for: \"{}\"", query)
}

pub fn http_error(status: u16) -> String {
    format!(
        "Error contacting the VS Code Marketplace API. (Error: {})",
        status
    )
}
