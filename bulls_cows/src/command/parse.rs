use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during command parsing.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum ParseError {
    /// `guess` without digits.
    #[error("Guess requires digits (e.g., '/guess 1234')")]
    MissingGuess,
    /// Unrecognized command.
    #[error("Unrecognized command '{0}'")]
    UnrecognizedCommand(String),
}

/// One core operation requested from a chat.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Command {
    NewGame,
    Join,
    Leave,
    Start,
    Guess(String),
    Status,
    End,
    Version,
}

impl Command {
    /// Parse a command name and its arguments.
    ///
    /// Names are case-insensitive and may carry the chat-style leading `/`
    /// and a trailing `@botname` mention.
    ///
    /// # Examples
    ///
    /// ```
    /// use bulls_cows::command::Command;
    ///
    /// assert_eq!(Command::parse("/startgame@bulls_bot", &[]), Ok(Command::Start));
    /// assert_eq!(
    ///     Command::parse("guess", &["1234".to_string()]),
    ///     Ok(Command::Guess("1234".to_string()))
    /// );
    /// ```
    pub fn parse(name: &str, args: &[String]) -> Result<Self, ParseError> {
        let normalized = normalize_name(name);

        match normalized.as_str() {
            "newgame" => Ok(Self::NewGame),
            "join" => Ok(Self::Join),
            "quit" | "leave" => Ok(Self::Leave),
            "startgame" | "start" => Ok(Self::Start),
            "guess" => args
                .first()
                .map(|digits| Self::Guess(digits.trim().to_string()))
                .ok_or(ParseError::MissingGuess),
            "status" => Ok(Self::Status),
            "endgame" | "end" => Ok(Self::End),
            "version" => Ok(Self::Version),
            _ => Err(ParseError::UnrecognizedCommand(name.trim().to_string())),
        }
    }

    /// Whether the command only makes sense in a group chat.
    pub fn requires_group(&self) -> bool {
        matches!(self, Self::NewGame | Self::Guess(_))
    }
}

fn normalize_name(name: &str) -> String {
    let trimmed = name.trim();
    let without_slash = trimmed.strip_prefix('/').unwrap_or(trimmed);
    let without_mention = without_slash
        .split_once('@')
        .map_or(without_slash, |(command, _)| command);
    without_mention.to_ascii_lowercase()
}
