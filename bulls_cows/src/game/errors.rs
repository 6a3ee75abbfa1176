//! Game error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::entities::Player;

/// Errors returned by session and registry operations.
///
/// Every variant is an expected condition the caller can report back to the
/// chat; none of them leave the session in a modified state.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum GameError {
    #[error("a game is already running for this chat")]
    SessionAlreadyExists,
    #[error("game already started")]
    GameAlreadyStarted,
    #[error("game not started")]
    GameNotStarted,
    #[error("need 2+ players")]
    NotEnoughPlayers,
    #[error("player is not in this game")]
    PlayerNotInGame,
    #[error("not your turn, waiting on {current}")]
    NotYourTurn { current: Player },
    #[error("guess must be {expected_len} distinct digits")]
    MalformedGuess { expected_len: usize },
    #[error("secret length {0} must be between 1 and 10")]
    InvalidLength(usize),
    #[error("no game for this chat")]
    SessionNotFound,
    #[error("session is closed")]
    SessionClosed,
}

/// Result type for game operations
pub type GameResult<T> = Result<T, GameError>;
