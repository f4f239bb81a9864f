//! Command parsing for inbound text.
//!
//! Two command surfaces share one shape: a prefix character, a command name, and the rest of the
//! message as arguments. `!ext python` is a text command; `/ping` (or `/ping@some_bot` in groups) is
//! a slash command.

/// Prefix of free-text commands (`!ext <query>`).
pub const TEXT_COMMAND_PREFIX: char = '!';
/// Prefix of platform-native slash commands (`/ping`).
pub const SLASH_COMMAND_PREFIX: char = '/';

/// A parsed command: its name (without prefix or `@botname` suffix) and raw arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandInvocation<'a> {
    pub name: &'a str,
    /// Everything after the command token, untrimmed except for the separating whitespace.
    pub args: &'a str,
}

impl<'a> CommandInvocation<'a> {
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}

/// Parses `content` as a command with the given prefix. Returns None when the message does not start
/// with the prefix or the command name is empty.
pub fn parse_command(content: &str, prefix: char) -> Option<CommandInvocation<'_>> {
    let rest = content.trim_start().strip_prefix(prefix)?;
    let (token, args) = match rest.find(char::is_whitespace) {
        Some(idx) => (&rest[..idx], rest[idx..].trim_start()),
        None => (rest, ""),
    };
    let name = token.split('@').next().unwrap_or(token);
    if name.is_empty() {
        return None;
    }
    Some(CommandInvocation { name, args })
}
