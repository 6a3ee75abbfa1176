//! Players, phases and the snapshots and outcomes sessions hand back.

use serde::{Deserialize, Serialize};
use std::{
    fmt,
    hash::{Hash, Hasher},
};

use super::{scoring::Score, secret::Secret};

/// Platform user identifier.
pub type PlayerId = i64;

/// Chat (or group) identifier scoping exactly one live game.
pub type SessionKey = i64;

/// A single decimal digit, `0..=9`.
pub type Digit = u8;

pub const DEFAULT_SECRET_LENGTH: usize = 4;
pub const MAX_SECRET_LENGTH: usize = 10;
pub const MIN_PLAYERS: usize = 2;

/// A player is identified by their platform id. The display name is
/// carried along for replies but never takes part in equality.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl Hash for Player {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Lifecycle of a session. `Finished` is terminal.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Lobby,
    Active,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Lobby => "lobby",
            Self::Active => "active",
            Self::Finished => "finished",
        };
        write!(f, "{repr}")
    }
}

/// One accepted guess in a session's history.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GuessRecord {
    pub player_id: PlayerId,
    pub guess: String,
    pub score: Score,
}

/// Read-only snapshot of a session.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SessionStatus {
    pub phase: Phase,
    pub players: Vec<Player>,
    /// Only set while the game is active.
    pub current_turn: Option<Player>,
    pub guess_count: usize,
    pub secret_length: usize,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum JoinOutcome {
    Joined,
    AlreadyJoined,
}

/// Result of an accepted guess.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GuessOutcome {
    /// The guess missed; the turn moved on to `next`.
    Continue { score: Score, next: Player },
    /// The guess matched every digit and the session is now finished.
    Win {
        winner: Player,
        secret: Secret,
        score: Score,
        guesses: usize,
    },
}

impl GuessOutcome {
    #[must_use]
    pub fn score(&self) -> Score {
        match self {
            Self::Continue { score, .. } | Self::Win { score, .. } => *score,
        }
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, Self::Win { .. })
    }
}
