//! Guess scoring and validation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{
    entities::Digit,
    errors::{GameError, GameResult},
    secret::{Secret, has_repeats, parse_digits},
};

/// Feedback for a guess: `bulls` (A) are digits in the right place,
/// `cows` (B) are digits present in the secret but misplaced.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Score {
    pub bulls: usize,
    pub cows: usize,
}

impl Score {
    #[must_use]
    pub const fn new(bulls: usize, cows: usize) -> Self {
        Self { bulls, cows }
    }

    #[must_use]
    pub const fn is_win(&self, secret_length: usize) -> bool {
        self.bulls == secret_length
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}A{}B", self.bulls, self.cows)
    }
}

/// Score `guess` against `secret`.
///
/// Repeated digits in the guess are counted by multiset overlap, so this is
/// well defined even for guesses the session layer would reject.
///
/// # Errors
///
/// Returns [`GameError::MalformedGuess`] if the lengths differ.
pub fn score(secret: &Secret, guess: &[Digit]) -> GameResult<Score> {
    let answer = secret.digits();
    if guess.len() != answer.len() {
        return Err(GameError::MalformedGuess {
            expected_len: answer.len(),
        });
    }

    let bulls = answer.iter().zip(guess).filter(|(a, g)| a == g).count();

    let mut distinct = guess.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    let count = |digits: &[Digit], d: Digit| digits.iter().filter(|&&x| x == d).count();
    let common: usize = distinct
        .into_iter()
        .map(|d| count(answer, d).min(count(guess, d)))
        .sum();

    Ok(Score::new(bulls, common - bulls))
}

/// Validate raw guess text: exactly `expected_len` distinct ASCII digits,
/// surrounding whitespace ignored.
///
/// # Errors
///
/// Returns [`GameError::MalformedGuess`] on any violation.
pub fn parse_guess(input: &str, expected_len: usize) -> GameResult<Vec<Digit>> {
    let malformed = GameError::MalformedGuess { expected_len };

    let digits = parse_digits(input.trim()).ok_or_else(|| malformed.clone())?;
    if digits.len() != expected_len || has_repeats(&digits) {
        return Err(malformed);
    }

    Ok(digits)
}
