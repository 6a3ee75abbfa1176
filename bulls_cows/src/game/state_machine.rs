//! Session state machine.
//!
//! A [`Session`] is one round of bulls and cows for one chat. It moves
//! through `Lobby -> Active -> Finished` and never leaves `Finished`.
//! Every operation either succeeds or returns a [`GameError`] without
//! touching the session, so callers can retry or report freely.

use log::{debug, info};

use super::{
    entities::{
        GuessOutcome, GuessRecord, JoinOutcome, MIN_PLAYERS, Phase, Player, PlayerId,
        SessionStatus,
    },
    errors::{GameError, GameResult},
    scoring::{parse_guess, score},
    secret::Secret,
};

#[derive(Debug)]
pub struct Session {
    secret: Secret,
    /// Join order is turn order.
    roster: Vec<Player>,
    phase: Phase,
    /// Index into `roster`, meaningful only while `Active`.
    turn_index: usize,
    history: Vec<GuessRecord>,
}

impl Session {
    /// Create a lobby with a freshly generated secret.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidLength`] unless `1 <= secret_length <= 10`.
    pub fn new(secret_length: usize) -> GameResult<Self> {
        Ok(Self::with_secret(Secret::generate(secret_length)?))
    }

    /// Create a lobby around a known secret.
    #[must_use]
    pub fn with_secret(secret: Secret) -> Self {
        Self {
            secret,
            roster: Vec::new(),
            phase: Phase::Lobby,
            turn_index: 0,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    #[must_use]
    pub fn roster(&self) -> &[Player] {
        &self.roster
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn secret(&self) -> &Secret {
        &self.secret
    }

    #[must_use]
    pub fn secret_length(&self) -> usize {
        self.secret.len()
    }

    /// The player whose guess is accepted next, if the game is active.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        match self.phase {
            Phase::Active => self.roster.get(self.turn_index),
            Phase::Lobby | Phase::Finished => None,
        }
    }

    fn contains_player(&self, player_id: PlayerId) -> bool {
        self.roster.iter().any(|p| p.id == player_id)
    }

    /// Add a player to the lobby. Joining twice is a no-op.
    pub fn join(&mut self, player_id: PlayerId, name: impl Into<String>) -> GameResult<JoinOutcome> {
        if self.phase != Phase::Lobby {
            return Err(GameError::GameAlreadyStarted);
        }
        if self.contains_player(player_id) {
            return Ok(JoinOutcome::AlreadyJoined);
        }

        let player = Player::new(player_id, name);
        debug!("Player {} ({}) joined lobby", player.id, player.name);
        self.roster.push(player);
        Ok(JoinOutcome::Joined)
    }

    /// Remove a player from the lobby. Not allowed once the game started.
    pub fn leave(&mut self, player_id: PlayerId) -> GameResult<Player> {
        if self.phase != Phase::Lobby {
            return Err(GameError::GameAlreadyStarted);
        }
        let idx = self
            .roster
            .iter()
            .position(|p| p.id == player_id)
            .ok_or(GameError::PlayerNotInGame)?;

        let player = self.roster.remove(idx);
        debug!("Player {} ({}) left lobby", player.id, player.name);
        Ok(player)
    }

    /// Close the lobby and hand the first turn to the first player who joined.
    pub fn start(&mut self) -> GameResult<Player> {
        if self.phase != Phase::Lobby {
            return Err(GameError::GameAlreadyStarted);
        }
        if self.roster.len() < MIN_PLAYERS {
            return Err(GameError::NotEnoughPlayers);
        }

        self.phase = Phase::Active;
        self.turn_index = 0;
        info!("Game started with {} players", self.roster.len());

        self.current_player()
            .cloned()
            .ok_or(GameError::NotEnoughPlayers)
    }

    /// Submit a guess for the player holding the turn.
    pub fn guess(&mut self, player_id: PlayerId, digits: &str) -> GameResult<GuessOutcome> {
        if self.phase != Phase::Active {
            return Err(GameError::GameNotStarted);
        }
        if !self.contains_player(player_id) {
            return Err(GameError::PlayerNotInGame);
        }

        let current = self
            .current_player()
            .cloned()
            .ok_or(GameError::GameNotStarted)?;
        if current.id != player_id {
            return Err(GameError::NotYourTurn { current });
        }

        let guess = parse_guess(digits, self.secret_length())?;
        let result = score(&self.secret, &guess)?;

        self.history.push(GuessRecord {
            player_id,
            guess: digits.trim().to_string(),
            score: result,
        });

        if result.is_win(self.secret_length()) {
            self.phase = Phase::Finished;
            info!(
                "Player {} guessed the secret after {} guesses",
                player_id,
                self.history.len()
            );
            return Ok(GuessOutcome::Win {
                winner: current,
                secret: self.secret.clone(),
                score: result,
                guesses: self.history.len(),
            });
        }

        self.turn_index = (self.turn_index + 1) % self.roster.len();
        let next = self
            .current_player()
            .cloned()
            .ok_or(GameError::GameNotStarted)?;

        Ok(GuessOutcome::Continue {
            score: result,
            next,
        })
    }

    #[must_use]
    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            phase: self.phase,
            players: self.roster.clone(),
            current_turn: self.current_player().cloned(),
            guess_count: self.history.len(),
            secret_length: self.secret_length(),
        }
    }

    /// Force the session into `Finished` and reveal the secret.
    pub fn end(&mut self) -> Secret {
        if self.phase != Phase::Finished {
            info!("Game ended in phase {}", self.phase);
            self.phase = Phase::Finished;
        }
        self.secret.clone()
    }
}
