//! Play one round between two scripted players against a random secret.
//!
//! Run with: `cargo run -p bulls_cows --example local_round`

use bulls_cows::{
    GuessOutcome, Secret, Session,
    game::{parse_guess, score},
};

fn main() {
    let mut game = match Session::new(4) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("Failed to create game: {e}");
            return;
        }
    };

    game.join(1, "alice").ok();
    game.join(2, "bob").ok();
    let Ok(first) = game.start() else {
        eprintln!("Failed to start game");
        return;
    };
    println!("Game started, {first} goes first");

    // Every ordered 4-digit guess with distinct digits
    let candidates: Vec<String> = (0..10_000)
        .map(|n| format!("{n:04}"))
        .filter(|s| parse_guess(s, 4).is_ok())
        .collect();

    // Keep only candidates consistent with all feedback so far
    let mut remaining = candidates;
    while let Some(player) = game.current_player().cloned() {
        let Some(guess) = remaining.first().cloned() else {
            break;
        };

        match game.guess(player.id, &guess) {
            Ok(GuessOutcome::Continue { score: result, next }) => {
                println!("{player} -> {guess} -> {result}, {next} is next");
                remaining.retain(|candidate| {
                    let digits: Vec<u8> = candidate.bytes().map(|b| b - b'0').collect();
                    guess
                        .parse::<Secret>()
                        .ok()
                        .and_then(|as_secret| score(&as_secret, &digits).ok())
                        == Some(result)
                });
            }
            Ok(GuessOutcome::Win {
                winner,
                secret,
                guesses,
                ..
            }) => {
                println!("{winner} found {secret} after {guesses} guesses");
            }
            Err(e) => {
                eprintln!("Guess rejected: {e}");
                break;
            }
        }
    }
}
