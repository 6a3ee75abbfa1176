//! Session actor implementation with async message handling.

use super::{config::SessionConfig, messages::SessionMessage};
use crate::game::{
    GameError, GameResult, GuessOutcome, JoinOutcome, Phase, Player, PlayerId, Secret, Session,
    SessionKey, SessionStatus,
};
use tokio::sync::{mpsc, oneshot, watch};

/// Session actor handle for sending messages
#[derive(Clone, Debug)]
pub struct SessionHandle {
    sender: mpsc::Sender<SessionMessage>,
    phase: watch::Receiver<Phase>,
    key: SessionKey,
}

impl SessionHandle {
    /// Get session key
    pub fn key(&self) -> SessionKey {
        self.key
    }

    /// Last phase published by the actor. Never waits on the actor.
    pub fn phase(&self) -> Phase {
        *self.phase.borrow()
    }

    pub fn is_finished(&self) -> bool {
        self.phase() == Phase::Finished
    }

    /// Whether both handles talk to the same actor
    pub fn same_session(&self, other: &SessionHandle) -> bool {
        self.sender.same_channel(&other.sender)
    }

    /// Send a message and wait for the actor's reply
    async fn request<T>(
        &self,
        message: impl FnOnce(oneshot::Sender<T>) -> SessionMessage,
    ) -> GameResult<T> {
        let (tx, rx) = oneshot::channel();
        self.sender
            .send(message(tx))
            .await
            .map_err(|_| GameError::SessionClosed)?;
        rx.await.map_err(|_| GameError::SessionClosed)
    }

    pub async fn join(&self, player_id: PlayerId, name: impl Into<String>) -> GameResult<JoinOutcome> {
        let name = name.into();
        self.request(|response| SessionMessage::Join {
            player_id,
            name,
            response,
        })
        .await?
    }

    pub async fn leave(&self, player_id: PlayerId) -> GameResult<Player> {
        self.request(|response| SessionMessage::Leave {
            player_id,
            response,
        })
        .await?
    }

    pub async fn start(&self) -> GameResult<Player> {
        self.request(|response| SessionMessage::Start { response })
            .await?
    }

    pub async fn guess(&self, player_id: PlayerId, guess: impl Into<String>) -> GameResult<GuessOutcome> {
        let guess = guess.into();
        self.request(|response| SessionMessage::Guess {
            player_id,
            guess,
            response,
        })
        .await?
    }

    pub async fn status(&self) -> GameResult<SessionStatus> {
        self.request(|response| SessionMessage::Status { response })
            .await
    }

    pub async fn end(&self) -> GameResult<Secret> {
        self.request(|response| SessionMessage::End { response })
            .await
    }
}

/// Session actor owning a single game
pub struct SessionActor {
    /// Chat key this session belongs to
    key: SessionKey,

    /// Game state (FSM)
    session: Session,

    /// Message inbox
    inbox: mpsc::Receiver<SessionMessage>,

    /// Phase broadcast read by handles without a round-trip
    phase: watch::Sender<Phase>,
}

impl SessionActor {
    /// Create a new session actor with a freshly generated secret
    ///
    /// # Arguments
    ///
    /// * `key` - Chat key
    /// * `config` - Session configuration
    ///
    /// # Returns
    ///
    /// * `(SessionActor, SessionHandle)` - Actor and handle for sending messages
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidLength`] for an unusable secret length.
    pub fn new(key: SessionKey, config: &SessionConfig) -> GameResult<(Self, SessionHandle)> {
        let session = Session::new(config.secret_length)?;
        Ok(Self::with_session(key, session, config.inbox_capacity))
    }

    /// Wrap an existing session
    pub fn with_session(
        key: SessionKey,
        session: Session,
        inbox_capacity: usize,
    ) -> (Self, SessionHandle) {
        let (sender, inbox) = mpsc::channel(inbox_capacity.max(1));
        let (phase, phase_rx) = watch::channel(session.phase());

        let actor = Self {
            key,
            session,
            inbox,
            phase,
        };

        let handle = SessionHandle {
            sender,
            phase: phase_rx,
            key,
        };

        (actor, handle)
    }

    /// Run the session actor event loop until every handle is dropped
    pub async fn run(mut self) {
        log::info!("Session {} starting", self.key);

        while let Some(message) = self.inbox.recv().await {
            self.handle_message(message);
        }

        log::info!(
            "Session {} closed in phase {} after {} guesses",
            self.key,
            self.session.phase(),
            self.session.history().len()
        );
    }

    /// Handle a session message. The phase is published before replying so
    /// that a caller who sees a win also sees `Finished` on its handle.
    fn handle_message(&mut self, message: SessionMessage) {
        match message {
            SessionMessage::Join {
                player_id,
                name,
                response,
            } => {
                let result = self.session.join(player_id, name);
                self.log_rejection("join", player_id, &result);
                let _ = response.send(result);
            }

            SessionMessage::Leave {
                player_id,
                response,
            } => {
                let result = self.session.leave(player_id);
                self.log_rejection("leave", player_id, &result);
                let _ = response.send(result);
            }

            SessionMessage::Start { response } => {
                let result = self.session.start();
                self.publish_phase();
                let _ = response.send(result);
            }

            SessionMessage::Guess {
                player_id,
                guess,
                response,
            } => {
                let result = self.session.guess(player_id, &guess);
                self.log_rejection("guess", player_id, &result);
                self.publish_phase();
                let _ = response.send(result);
            }

            SessionMessage::Status { response } => {
                let _ = response.send(self.session.status());
            }

            SessionMessage::End { response } => {
                let secret = self.session.end();
                self.publish_phase();
                let _ = response.send(secret);
            }
        }
    }

    fn publish_phase(&self) {
        let current = self.session.phase();
        self.phase.send_if_modified(|phase| {
            if *phase == current {
                false
            } else {
                *phase = current;
                true
            }
        });
    }

    fn log_rejection<T>(&self, operation: &str, player_id: PlayerId, result: &GameResult<T>) {
        if let Err(e) = result {
            log::debug!(
                "Session {}: {} by player {} rejected: {}",
                self.key,
                operation,
                player_id,
                e
            );
        }
    }
}
