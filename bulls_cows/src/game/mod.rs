//! Bulls and cows game engine - core state machine and scoring.
//!
//! This module provides the foundational game implementation including:
//! - Secret generation (distinct random digits)
//! - Guess scoring into bulls (A) and cows (B)
//! - The per-chat session state machine (`Lobby -> Active -> Finished`)
//! - Error types shared by every layer above the engine

pub mod entities;
pub mod errors;
pub mod scoring;
pub mod secret;
pub mod state_machine;

pub use entities::{
    DEFAULT_SECRET_LENGTH, Digit, GuessOutcome, GuessRecord, JoinOutcome, MAX_SECRET_LENGTH,
    MIN_PLAYERS, Phase, Player, PlayerId, SessionKey, SessionStatus,
};
pub use errors::{GameError, GameResult};
pub use scoring::{Score, parse_guess, score};
pub use secret::Secret;
pub use state_machine::Session;
