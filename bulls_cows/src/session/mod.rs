//! Session module providing one game per chat with an async actor model.
//!
//! This module implements:
//! - SessionActor: Async actor owning a single [`Session`](crate::game::Session)
//! - SessionHandle: Cloneable sender used to talk to an actor
//! - SessionManager: Registry mapping chat keys to live sessions
//! - Message-based communication with tokio channels
//!
//! ## Architecture
//!
//! Each session runs in a separate Tokio task with an mpsc message inbox.
//! The actor applies one message at a time, so the "is it my turn" check and
//! the turn advance are atomic with respect to every other caller. Replies go
//! back over oneshot channels before the caller does any network I/O.
//!
//! The SessionManager keeps a short-lived lock over the key map only; it
//! never holds that lock while waiting on an actor.
//!
//! ## Example
//!
//! ```
//! use bulls_cows::session::{SessionConfig, SessionManager};
//!
//! #[tokio::main]
//! async fn main() {
//!     let manager = SessionManager::new(SessionConfig::default());
//!     let chat_id = -100_42;
//!
//!     manager.create_session(chat_id).await.unwrap();
//!     manager.join(chat_id, 1, "alice").await.unwrap();
//!     manager.join(chat_id, 2, "bob").await.unwrap();
//!
//!     let first = manager.start(chat_id).await.unwrap();
//!     assert_eq!(first.name, "alice");
//! }
//! ```

pub mod actor;
pub mod config;
pub mod manager;
pub mod messages;

pub use actor::{SessionActor, SessionHandle};
pub use config::SessionConfig;
pub use manager::SessionManager;
pub use messages::SessionMessage;
