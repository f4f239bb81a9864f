//! # extbot-core
//!
//! Core types and traits for the marketplace bot: [`Bot`], [`Handler`], message, user and card types,
//! command parsing, the typing indicator guard, and tracing initialization. Transport-agnostic; used by
//! extbot-telegram, handler-chain and the handler crates.

pub mod bot;
pub mod card;
pub mod command;
pub mod error;
pub mod logger;
pub mod types;
pub mod typing;

pub use bot::Bot;
pub use card::{Card, CardLine};
pub use command::{parse_command, CommandInvocation, SLASH_COMMAND_PREFIX, TEXT_COMMAND_PREFIX};
pub use error::{BotError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
pub use typing::TypingIndicator;
