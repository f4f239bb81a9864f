//! Cross-cutting handlers that run around every message.

mod logging;

pub use logging::LoggingHandler;
