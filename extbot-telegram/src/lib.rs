//! # extbot-telegram
//!
//! Telegram layer of the marketplace bot: adapters, [`extbot_core::Bot`] implementation, config,
//! REPL runner and the composition root [`run_bot`].

mod adapters;
mod app;
mod bot_adapter;
mod config;
mod render;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use app::{build_handler_chain, build_teloxide_bot, run_bot};
pub use bot_adapter::TelegramBotAdapter;
pub use config::{BotConfig, DEFAULT_LOG_FILE};
pub use render::card_html;
pub use runner::{run_repl, slash_commands, sync_commands};
