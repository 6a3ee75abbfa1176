//! # Bulls & Cows
//!
//! A group "bulls and cows" engine for chat bots, built around a small
//! finite state machine per chat.
//!
//! Players join a lobby, take turns guessing a secret of distinct digits,
//! and get `xAyB` feedback: `A` digits in the right place, `B` digits present
//! but misplaced. The first player to score all `A` wins and the game ends.
//!
//! ## Architecture
//!
//! Each session moves through three phases:
//!
//! - **Lobby**: Waiting for players to join
//! - **Active**: Players guess in join order, wrapping around the roster
//! - **Finished**: Someone won or the game was ended; terminal
//!
//! ## Core Modules
//!
//! - [`game`]: Secret generation, scoring, and the session state machine
//! - [`session`]: Per-chat actors and the registry that owns them
//! - [`command`]: Typed command records and dispatch for chat adapters
//!
//! ## Example
//!
//! ```
//! use bulls_cows::{GuessOutcome, Session};
//!
//! let mut game = Session::with_secret("1234".parse().unwrap());
//! game.join(1, "alice").unwrap();
//! game.join(2, "bob").unwrap();
//! game.start().unwrap();
//!
//! let outcome = game.guess(1, "1243").unwrap();
//! assert_eq!(outcome.score().to_string(), "2A2B");
//! assert!(matches!(outcome, GuessOutcome::Continue { .. }));
//! ```

/// Core game logic, entities, and state machine.
pub mod game;
pub use game::{
    GameError, GameResult, GuessOutcome, JoinOutcome, Phase, Player, PlayerId, Score, Secret,
    Session, SessionKey, SessionStatus,
};

/// Session actors and the session registry.
pub mod session;
pub use session::{SessionConfig, SessionHandle, SessionManager};

/// Chat command records and dispatch.
pub mod command;

/// Engine version reported by the `version` command.
pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"), "-group");
