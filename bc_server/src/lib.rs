//! Webhook server for the group bulls and cows bot.
//!
//! Chat updates arrive as JSON command records, are run against the
//! per-chat session through [`bulls_cows::SessionManager`], and the rendered
//! reply text goes back in the response body.

pub mod api;
pub mod config;
pub mod logging;
pub mod replies;
