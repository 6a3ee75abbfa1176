use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::parse::{Command, ParseError};
use crate::{
    VERSION,
    game::{GameError, GuessOutcome, JoinOutcome, Player, PlayerId, Score, Secret, SessionKey, SessionStatus},
    session::SessionManager,
};

/// Platform-neutral command as received from a chat.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct CommandRecord {
    pub session_key: SessionKey,
    pub player_id: PlayerId,
    pub player_name: String,
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandRecord {
    pub fn player(&self) -> Player {
        Player::new(self.player_id, self.player_name.clone())
    }

    pub fn parse(&self) -> Result<Command, ParseError> {
        Command::parse(&self.command, &self.args)
    }
}

/// Successful result of one dispatched command.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CommandOutcome {
    Created { secret_length: usize },
    Joined(Player),
    AlreadyJoined(Player),
    Left(Player),
    Started { first: Player },
    Guessed {
        player: Player,
        guess: String,
        score: Score,
        next: Player,
    },
    Won {
        winner: Player,
        guess: String,
        score: Score,
        secret: Secret,
        guesses: usize,
    },
    Status(SessionStatus),
    Ended { secret: Secret },
    Version(&'static str),
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CommandError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Game(#[from] GameError),
}

impl SessionManager {
    /// Run the single session operation a record asks for.
    pub async fn dispatch(&self, record: &CommandRecord) -> Result<CommandOutcome, CommandError> {
        let command = record.parse()?;
        self.execute(record, command).await
    }

    /// Run an already parsed command on behalf of `record`'s player and chat.
    pub async fn execute(
        &self,
        record: &CommandRecord,
        command: Command,
    ) -> Result<CommandOutcome, CommandError> {
        let key = record.session_key;

        let outcome = match command {
            Command::NewGame => {
                let handle = self.create_session(key).await?;
                let status = handle.status().await?;
                CommandOutcome::Created {
                    secret_length: status.secret_length,
                }
            }

            Command::Join => match self.join(key, record.player_id, &record.player_name).await? {
                JoinOutcome::Joined => CommandOutcome::Joined(record.player()),
                JoinOutcome::AlreadyJoined => CommandOutcome::AlreadyJoined(record.player()),
            },

            Command::Leave => CommandOutcome::Left(self.leave(key, record.player_id).await?),

            Command::Start => CommandOutcome::Started {
                first: self.start(key).await?,
            },

            Command::Guess(guess) => {
                match self.guess(key, record.player_id, guess.clone()).await? {
                    GuessOutcome::Continue { score, next } => CommandOutcome::Guessed {
                        player: record.player(),
                        guess,
                        score,
                        next,
                    },
                    GuessOutcome::Win {
                        winner,
                        secret,
                        score,
                        guesses,
                    } => CommandOutcome::Won {
                        winner,
                        guess,
                        score,
                        secret,
                        guesses,
                    },
                }
            }

            Command::Status => CommandOutcome::Status(self.status(key).await?),

            Command::End => CommandOutcome::Ended {
                secret: self.end(key).await?,
            },

            Command::Version => CommandOutcome::Version(VERSION),
        };

        Ok(outcome)
    }
}
