//! # extbot-cli
//!
//! Argument parsing for the `extbot` binary.

pub mod cli;

pub use cli::{Cli, Commands};
