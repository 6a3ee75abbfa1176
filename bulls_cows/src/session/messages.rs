//! Session actor message types.

use crate::game::{
    GameResult, GuessOutcome, JoinOutcome, Player, PlayerId, Secret, SessionStatus,
};
use tokio::sync::oneshot;

/// Messages that can be sent to a SessionActor
#[derive(Debug)]
pub enum SessionMessage {
    /// Join the lobby
    Join {
        player_id: PlayerId,
        name: String,
        response: oneshot::Sender<GameResult<JoinOutcome>>,
    },

    /// Leave the lobby
    Leave {
        player_id: PlayerId,
        response: oneshot::Sender<GameResult<Player>>,
    },

    /// Close the lobby and begin turns
    Start {
        response: oneshot::Sender<GameResult<Player>>,
    },

    /// Submit a guess
    Guess {
        player_id: PlayerId,
        guess: String,
        response: oneshot::Sender<GameResult<GuessOutcome>>,
    },

    /// Read-only snapshot
    Status {
        response: oneshot::Sender<SessionStatus>,
    },

    /// Force the game to finish and reveal the secret
    End { response: oneshot::Sender<Secret> },
}
