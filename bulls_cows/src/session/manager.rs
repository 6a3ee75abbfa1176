//! Session manager mapping chat keys to live session actors.

use super::{
    actor::{SessionActor, SessionHandle},
    config::SessionConfig,
};
use crate::game::{
    GameError, GameResult, GuessOutcome, JoinOutcome, Player, PlayerId, Secret, SessionKey,
    SessionStatus,
};
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

/// Registry of live sessions, at most one per chat key
#[derive(Clone)]
pub struct SessionManager {
    /// Settings for newly created sessions
    config: SessionConfig,

    /// Active session handles
    sessions: Arc<RwLock<HashMap<SessionKey, SessionHandle>>>,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Get a session handle
    ///
    /// An entry whose actor already published `Finished` counts as absent,
    /// even if its removal has not run yet.
    ///
    /// # Returns
    ///
    /// * `Option<SessionHandle>` - Session handle if the key has a live entry
    pub async fn get_session(&self, key: SessionKey) -> Option<SessionHandle> {
        let sessions = self.sessions.read().await;
        sessions
            .get(&key)
            .filter(|handle| !handle.is_finished())
            .cloned()
    }

    /// Create and spawn a new session with the configured secret length
    ///
    /// # Errors
    ///
    /// * [`GameError::SessionAlreadyExists`] - the key maps to a session that is not finished
    pub async fn create_session(&self, key: SessionKey) -> GameResult<SessionHandle> {
        self.create_session_with_length(key, self.config.secret_length)
            .await
    }

    /// Create and spawn a new session with an explicit secret length
    ///
    /// A finished session still registered under `key` is replaced.
    ///
    /// # Errors
    ///
    /// * [`GameError::SessionAlreadyExists`] - the key maps to a session that is not finished
    /// * [`GameError::InvalidLength`] - `secret_length` is outside `1..=10`
    pub async fn create_session_with_length(
        &self,
        key: SessionKey,
        secret_length: usize,
    ) -> GameResult<SessionHandle> {
        let config = SessionConfig {
            secret_length,
            ..self.config
        };

        let mut sessions = self.sessions.write().await;
        if let Some(existing) = sessions.get(&key)
            && !existing.is_finished()
        {
            return Err(GameError::SessionAlreadyExists);
        }

        let (actor, handle) = SessionActor::new(key, &config)?;
        sessions.insert(key, handle.clone());
        drop(sessions);

        // Spawn actor task
        tokio::spawn(async move {
            actor.run().await;
        });

        log::info!("Created session for chat {}", key);

        Ok(handle)
    }

    /// Remove a session. No-op if absent.
    ///
    /// The actor keeps serving handles already given out and stops once the
    /// last one is dropped.
    pub async fn remove_session(&self, key: SessionKey) -> bool {
        let mut sessions = self.sessions.write().await;
        let removed = sessions.remove(&key).is_some();
        drop(sessions);

        if removed {
            log::info!("Removed session for chat {}", key);
        }
        removed
    }

    /// Drop a finished session's entry on a detached task, so the removal
    /// still happens when the caller is cancelled after the actor replied.
    fn spawn_removal(&self, key: SessionKey, handle: SessionHandle) {
        let sessions = Arc::clone(&self.sessions);
        tokio::spawn(async move {
            remove_if_same(&sessions, key, &handle).await;
        });
    }

    /// Get active session count, purging entries whose game already finished
    pub async fn active_session_count(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        sessions.retain(|key, handle| {
            let live = !handle.is_finished();
            if !live {
                log::info!("Purged finished session for chat {}", key);
            }
            live
        });
        sessions.len()
    }

    async fn handle(&self, key: SessionKey) -> GameResult<SessionHandle> {
        self.get_session(key)
            .await
            .ok_or(GameError::SessionNotFound)
    }

    /// Join a session's lobby
    pub async fn join(
        &self,
        key: SessionKey,
        player_id: PlayerId,
        name: impl Into<String>,
    ) -> GameResult<JoinOutcome> {
        self.handle(key).await?.join(player_id, name).await
    }

    /// Leave a session's lobby
    pub async fn leave(&self, key: SessionKey, player_id: PlayerId) -> GameResult<Player> {
        self.handle(key).await?.leave(player_id).await
    }

    /// Start a session
    pub async fn start(&self, key: SessionKey) -> GameResult<Player> {
        self.handle(key).await?.start().await
    }

    /// Submit a guess. A winning guess removes the session from the registry.
    pub async fn guess(
        &self,
        key: SessionKey,
        player_id: PlayerId,
        guess: impl Into<String>,
    ) -> GameResult<GuessOutcome> {
        let handle = self.handle(key).await?;
        let outcome = handle.guess(player_id, guess).await?;

        if outcome.is_win() {
            self.spawn_removal(key, handle);
        }

        Ok(outcome)
    }

    /// Get a session's status
    pub async fn status(&self, key: SessionKey) -> GameResult<SessionStatus> {
        self.handle(key).await?.status().await
    }

    /// End a session, remove it, and return its secret
    pub async fn end(&self, key: SessionKey) -> GameResult<Secret> {
        let handle = self.handle(key).await?;
        let secret = handle.end().await?;
        self.spawn_removal(key, handle);
        Ok(secret)
    }
}

/// Remove `key` only if it still maps to `handle`, so a game created
/// after this one finished is left alone.
async fn remove_if_same(
    sessions: &RwLock<HashMap<SessionKey, SessionHandle>>,
    key: SessionKey,
    handle: &SessionHandle,
) {
    let mut sessions = sessions.write().await;
    if sessions
        .get(&key)
        .is_some_and(|current| current.same_session(handle))
    {
        sessions.remove(&key);
        log::info!("Removed session for chat {}", key);
    }
}
