//! Chat reply rendering.
//!
//! Turns command outcomes and errors into Telegram-flavoured Markdown text.
//! Every [`GameError`] maps to exactly one fixed sentence.

use bulls_cows::{
    GameError, Phase, Player, PlayerId,
    command::{CommandError, CommandOutcome, ParseError},
    game::MIN_PLAYERS,
};

/// Reply for `newgame`/`guess` sent outside a group chat.
pub const GROUP_ONLY: &str = "This command only works in group chats.";

/// Render a clickable mention for a chat user.
///
/// Brackets in the display name would close the link text early, so they are
/// swapped for parentheses.
pub fn mention(id: PlayerId, name: &str) -> String {
    let label: String = name
        .chars()
        .map(|c| match c {
            '[' => '(',
            ']' => ')',
            c => c,
        })
        .collect();
    format!("[{label}](tg://user?id={id})")
}

fn mention_player(player: &Player) -> String {
    mention(player.id, &player.name)
}

/// Sample guess matching the configured secret length, e.g. `1234`.
pub fn sample_guess(secret_length: usize) -> String {
    "1234567890".chars().take(secret_length).collect()
}

/// Render a successful outcome.
pub fn render_outcome(outcome: &CommandOutcome, secret_length: usize) -> String {
    let usage = format!("`/guess {}`", sample_guess(secret_length));

    match outcome {
        CommandOutcome::Created { secret_length } => format!(
            "New game created! Send /join to sign up, then /startgame to begin.\n\
             The secret has {secret_length} distinct digits; guess with `/guess {}`.",
            sample_guess(*secret_length)
        ),
        CommandOutcome::Joined(player) => {
            format!("{} joined the game.", mention_player(player))
        }
        CommandOutcome::AlreadyJoined(player) => {
            format!("{} is already in the game.", mention_player(player))
        }
        CommandOutcome::Left(player) => format!("{} left the game.", mention_player(player)),
        CommandOutcome::Started { first } => format!(
            "Game started! It's {}'s turn, use {usage}.",
            mention_player(first)
        ),
        CommandOutcome::Guessed {
            player,
            guess,
            score,
            next,
        } => format!(
            "{} ➜ `{guess}` → `{score}`\nIt's {}'s turn, use {usage}.",
            mention_player(player),
            mention_player(next)
        ),
        CommandOutcome::Won {
            winner,
            guess,
            score,
            secret,
            guesses,
        } => format!(
            "{} ➜ `{guess}` → `{score}`\n{} cracked it! The answer was {secret} 🎉\n\
             Game over after {guesses} guesses.",
            mention_player(winner),
            mention_player(winner)
        ),
        CommandOutcome::Status(status) => {
            let players = if status.players.is_empty() {
                "(nobody)".to_string()
            } else {
                status
                    .players
                    .iter()
                    .map(mention_player)
                    .collect::<Vec<_>>()
                    .join(", ")
            };

            let mut text = format!(
                "Status:\n- Started: {}\n- Players: {players}\n",
                status.phase != Phase::Lobby
            );
            if let Some(current) = &status.current_turn {
                text.push_str(&format!("- Current turn: {}\n", mention_player(current)));
            }
            text.push_str(&format!("- Guesses: {}", status.guess_count));
            text
        }
        CommandOutcome::Ended { secret } => format!("Game over, the answer was {secret}."),
        CommandOutcome::Version(version) => format!("Bot version: {version}"),
    }
}

/// Render a rejected command.
pub fn render_error(error: &CommandError, secret_length: usize) -> String {
    match error {
        CommandError::Parse(ParseError::MissingGuess) => {
            format!("Usage: `/guess {}`", sample_guess(secret_length))
        }
        CommandError::Parse(ParseError::UnrecognizedCommand(name)) => {
            format!("Unknown command: {name}")
        }
        CommandError::Game(error) => render_game_error(error),
    }
}

pub fn render_game_error(error: &GameError) -> String {
    match error {
        GameError::SessionAlreadyExists => {
            "A game is already running in this chat. Use /endgame to stop it first.".to_string()
        }
        GameError::GameAlreadyStarted => "The game has already started.".to_string(),
        GameError::GameNotStarted => {
            "The game hasn't started yet. Use /startgame first.".to_string()
        }
        GameError::NotEnoughPlayers => format!("At least {MIN_PLAYERS} players are needed."),
        GameError::PlayerNotInGame => "You're not in this game. Use /join first.".to_string(),
        GameError::NotYourTurn { current } => {
            format!("It's not your turn, waiting on {}.", mention_player(current))
        }
        GameError::MalformedGuess { expected_len } => format!(
            "Please send {expected_len} distinct digits, e.g. `/guess {}`.",
            sample_guess(*expected_len)
        ),
        GameError::InvalidLength(len) => format!("A secret can't have {len} digits."),
        GameError::SessionNotFound => {
            "There's no game in this chat. Use /newgame to open one.".to_string()
        }
        GameError::SessionClosed => {
            "This game is no longer running. Use /newgame to open a new one.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulls_cows::{Score, SessionStatus};

    fn alice() -> Player {
        Player::new(1, "alice")
    }

    fn bob() -> Player {
        Player::new(2, "bob")
    }

    #[test]
    fn test_mention_format() {
        assert_eq!(mention(42, "alice"), "[alice](tg://user?id=42)");
        assert_eq!(mention(7, "[x]"), "[(x)](tg://user?id=7)");
    }

    #[test]
    fn test_sample_guess_length() {
        assert_eq!(sample_guess(4), "1234");
        assert_eq!(sample_guess(10), "1234567890");
    }

    #[test]
    fn test_guess_line() {
        let text = render_outcome(
            &CommandOutcome::Guessed {
                player: alice(),
                guess: "1243".to_string(),
                score: Score::new(2, 2),
                next: bob(),
            },
            4,
        );
        assert!(text.starts_with("[alice](tg://user?id=1) ➜ `1243` → `2A2B`"));
        assert!(text.contains("[bob](tg://user?id=2)'s turn"));
    }

    #[test]
    fn test_win_reply_reveals_secret() {
        let text = render_outcome(
            &CommandOutcome::Won {
                winner: bob(),
                guess: "0719".to_string(),
                score: Score::new(4, 0),
                secret: "0719".parse().unwrap(),
                guesses: 5,
            },
            4,
        );
        assert!(text.contains("`4A0B`"));
        assert!(text.contains("The answer was 0719"));
        assert!(text.contains("5 guesses"));
    }

    #[test]
    fn test_created_reply_explains_lobby() {
        let text = render_outcome(&CommandOutcome::Created { secret_length: 4 }, 4);
        assert!(text.contains("/join"));
        assert!(text.contains("/startgame"));
        assert!(text.contains("`/guess 1234`"));
    }

    #[test]
    fn test_status_reply() {
        let status = SessionStatus {
            phase: Phase::Active,
            players: vec![alice(), bob()],
            current_turn: Some(bob()),
            guess_count: 3,
            secret_length: 4,
        };
        let text = render_outcome(&CommandOutcome::Status(status), 4);
        assert!(text.contains("- Started: true"));
        assert!(text.contains("[alice](tg://user?id=1), [bob](tg://user?id=2)"));
        assert!(text.contains("- Current turn: [bob](tg://user?id=2)"));
        assert!(text.ends_with("- Guesses: 3"));

        let empty = SessionStatus {
            phase: Phase::Lobby,
            players: vec![],
            current_turn: None,
            guess_count: 0,
            secret_length: 4,
        };
        let text = render_outcome(&CommandOutcome::Status(empty), 4);
        assert!(text.contains("(nobody)"));
        assert!(!text.contains("Current turn"));
    }

    #[test]
    fn test_every_game_error_has_distinct_sentence() {
        let errors = [
            GameError::SessionAlreadyExists,
            GameError::GameAlreadyStarted,
            GameError::GameNotStarted,
            GameError::NotEnoughPlayers,
            GameError::PlayerNotInGame,
            GameError::NotYourTurn { current: alice() },
            GameError::MalformedGuess { expected_len: 4 },
            GameError::InvalidLength(11),
            GameError::SessionNotFound,
            GameError::SessionClosed,
        ];

        let rendered: std::collections::HashSet<_> =
            errors.iter().map(render_game_error).collect();
        assert_eq!(rendered.len(), errors.len());
    }

    #[test]
    fn test_not_your_turn_mentions_current_player() {
        let text = render_game_error(&GameError::NotYourTurn { current: bob() });
        assert_eq!(text, "It's not your turn, waiting on [bob](tg://user?id=2).");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            render_error(&CommandError::Parse(ParseError::MissingGuess), 4),
            "Usage: `/guess 1234`"
        );
        assert_eq!(
            render_error(
                &CommandError::Parse(ParseError::UnrecognizedCommand("/dance".to_string())),
                4
            ),
            "Unknown command: /dance"
        );
    }
}
