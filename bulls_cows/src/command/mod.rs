//! Typed command layer between a chat platform and the session registry.
//!
//! Platform adapters turn whatever update object they receive into a
//! [`CommandRecord`] and hand it to [`SessionManager::dispatch`]. Each record
//! runs exactly one session operation and yields a [`CommandOutcome`] or a
//! [`CommandError`]; turning either into chat text is the adapter's job.
//!
//! [`SessionManager::dispatch`]: crate::session::SessionManager::dispatch

pub mod dispatch;
pub mod parse;

pub use dispatch::{CommandError, CommandOutcome, CommandRecord};
pub use parse::{Command, ParseError};
