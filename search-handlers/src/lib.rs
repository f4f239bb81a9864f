//! Command handlers: `!ext <query>` marketplace search and the `/ping` health check.

mod cards;
pub mod messages;
mod ping_handler;
mod search_handler;

pub use cards::extension_card;
pub use ping_handler::{PingHandler, PING_COMMAND, PING_DESCRIPTION};
pub use search_handler::{SearchHandler, DEFAULT_RESULT_LIMIT, SEARCH_COMMAND};
