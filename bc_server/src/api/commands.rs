//! Chat command webhook.
//!
//! Run a command:
//! ```bash
//! curl -X POST http://localhost:5000/api/v1/sessions/-100123/commands \
//!   -H "Content-Type: application/json" \
//!   -d '{"player_id": 42, "player_name": "alice", "command": "/guess", "args": ["1234"], "chat_type": "group"}'
//! ```
//!
//! Game rule violations are ordinary replies (`"ok": false`), not HTTP
//! errors; the platform should post `reply` back to the chat either way.

use axum::{
    Json,
    extract::{Path, State},
};
use bulls_cows::{
    PlayerId, SessionKey,
    command::{CommandError, CommandRecord},
};
use serde::{Deserialize, Serialize};

use super::{AppState, request_id::RequestId};
use crate::{logging, replies};

/// Chat kinds in which a game can be played.
const GROUP_CHAT_TYPES: [&str; 2] = ["group", "supergroup"];

#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub player_id: PlayerId,
    pub player_name: String,
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
    /// Platform chat type, e.g. `group`, `supergroup` or `private`
    #[serde(default)]
    pub chat_type: Option<String>,
}

impl CommandRequest {
    fn into_record(self, session_key: SessionKey) -> CommandRecord {
        CommandRecord {
            session_key,
            player_id: self.player_id,
            player_name: self.player_name,
            command: self.command,
            args: self.args,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CommandResponse {
    pub ok: bool,
    pub reply: String,
}

impl CommandResponse {
    fn ok(reply: String) -> Json<Self> {
        Json(Self { ok: true, reply })
    }

    fn rejected(reply: String) -> Json<Self> {
        Json(Self { ok: false, reply })
    }
}

fn is_group_chat(chat_type: Option<&str>) -> bool {
    chat_type.is_none_or(|kind| GROUP_CHAT_TYPES.contains(&kind))
}

/// Run one chat command against the chat's session.
///
/// # Response
///
/// Always `200 OK` for a well-formed body:
/// ```json
/// { "ok": true, "reply": "[alice](tg://user?id=42) ➜ `1234` → `1A2B`\n..." }
/// ```
pub async fn handle_command(
    State(state): State<AppState>,
    Path(session_key): Path<SessionKey>,
    request_id: RequestId,
    Json(request): Json<CommandRequest>,
) -> Json<CommandResponse> {
    let manager = &state.session_manager;
    let secret_length = manager.config().secret_length;
    let in_group = is_group_chat(request.chat_type.as_deref());
    let record = request.into_record(session_key);

    tracing::debug!(
        request_id = request_id.as_str(),
        session_key,
        player_id = record.player_id,
        command = %record.command,
        "Dispatching command"
    );

    let result = match record.parse() {
        Ok(command) if command.requires_group() && !in_group => {
            logging::log_command(session_key, record.player_id, &record.command, false);
            return CommandResponse::rejected(replies::GROUP_ONLY.to_string());
        }
        Ok(command) => manager.execute(&record, command).await,
        Err(e) => Err(CommandError::from(e)),
    };

    logging::log_command(session_key, record.player_id, &record.command, result.is_ok());

    match result {
        Ok(outcome) => CommandResponse::ok(replies::render_outcome(&outcome, secret_length)),
        Err(e) => CommandResponse::rejected(replies::render_error(&e, secret_length)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulls_cows::command::Command;

    #[test]
    fn test_group_detection() {
        assert!(is_group_chat(None));
        assert!(is_group_chat(Some("group")));
        assert!(is_group_chat(Some("supergroup")));
        assert!(!is_group_chat(Some("private")));
        assert!(!is_group_chat(Some("channel")));
    }

    #[test]
    fn test_request_defaults() {
        let request: CommandRequest = serde_json::from_str(
            r#"{"player_id": 1, "player_name": "alice", "command": "/join"}"#,
        )
        .unwrap();
        assert!(request.args.is_empty());
        assert!(request.chat_type.is_none());

        let record = request.into_record(-5);
        assert_eq!(record.session_key, -5);
        assert_eq!(record.parse(), Ok(Command::Join));
    }
}
