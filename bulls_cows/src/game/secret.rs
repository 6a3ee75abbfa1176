//! Secret generation.

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{
    entities::{Digit, MAX_SECRET_LENGTH},
    errors::{GameError, GameResult},
};

/// The hidden number for one round: distinct decimal digits in order.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Secret(Vec<Digit>);

impl Secret {
    /// Draw `length` distinct digits uniformly at random without replacement.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidLength`] unless `1 <= length <= 10`.
    pub fn generate(length: usize) -> GameResult<Self> {
        validate_length(length)?;

        let mut digits: Vec<Digit> = (0..=9).collect();
        digits.shuffle(&mut rand::rng());
        digits.truncate(length);

        Ok(Self(digits))
    }

    /// Build a secret from known digits.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidLength`] for an empty or over-long input and
    /// [`GameError::MalformedGuess`] for non-digits or repeats.
    pub fn from_digits(digits: &[Digit]) -> GameResult<Self> {
        validate_length(digits.len())?;
        if digits.iter().any(|&d| d > 9) || has_repeats(digits) {
            return Err(GameError::MalformedGuess {
                expected_len: digits.len(),
            });
        }
        Ok(Self(digits.to_vec()))
    }

    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Secret {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = parse_digits(trimmed).ok_or(GameError::MalformedGuess {
            expected_len: trimmed.chars().count(),
        })?;
        Self::from_digits(&digits)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

fn validate_length(length: usize) -> GameResult<()> {
    if length == 0 || length > MAX_SECRET_LENGTH {
        return Err(GameError::InvalidLength(length));
    }
    Ok(())
}

/// Parse ASCII decimal digits, `None` if any character is not one.
pub(crate) fn parse_digits(input: &str) -> Option<Vec<Digit>> {
    input
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as Digit))
        .collect()
}

/// Caller guarantees every digit is `<= 9`.
pub(crate) fn has_repeats(digits: &[Digit]) -> bool {
    let mut seen = 0u16;
    digits.iter().any(|&d| {
        let bit = 1u16 << d;
        let repeated = seen & bit != 0;
        seen |= bit;
        repeated
    })
}
