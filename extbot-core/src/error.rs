use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    /// The transport refused or failed to deliver a request.
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BotError>;
