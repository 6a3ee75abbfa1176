/// Property-based tests for secret generation and scoring using proptest
///
/// These tests verify the scorer across a wide range of randomly generated
/// secrets and guesses, including guesses with repeated digits.
use bulls_cows::{
    Secret,
    game::{Digit, parse_guess, score},
};
use proptest::prelude::*;
use std::collections::HashSet;

// Strategy to generate a valid secret of the given length
fn secret_strategy(len: usize) -> impl Strategy<Value = Secret> {
    Just((0..=9).collect::<Vec<Digit>>())
        .prop_shuffle()
        .prop_map(move |digits| Secret::from_digits(&digits[..len]).unwrap())
}

// Strategy to generate any digit sequence, repeats allowed
fn any_guess_strategy(len: usize) -> impl Strategy<Value = Vec<Digit>> {
    prop::collection::vec(0u8..=9, len)
}

proptest! {
    #[test]
    fn test_generated_secrets_are_valid(len in 1usize..=10) {
        let secret = Secret::generate(len).unwrap();
        prop_assert_eq!(secret.len(), len);

        let unique: HashSet<_> = secret.digits().iter().collect();
        prop_assert_eq!(unique.len(), len, "digits must be pairwise distinct");
        prop_assert!(secret.digits().iter().all(|&d| d <= 9));
    }

    #[test]
    fn test_bulls_plus_cows_bounded(
        secret in secret_strategy(4),
        guess in any_guess_strategy(4),
    ) {
        let result = score(&secret, &guess).unwrap();
        prop_assert!(result.bulls + result.cows <= 4);
    }

    #[test]
    fn test_secret_scores_itself_as_win(secret in secret_strategy(4)) {
        let result = score(&secret, secret.digits()).unwrap();
        prop_assert_eq!(result.bulls, 4);
        prop_assert_eq!(result.cows, 0);
        prop_assert!(result.is_win(4));
    }

    #[test]
    fn test_permutation_scores_all_digits(
        secret in secret_strategy(4),
        order in Just(vec![0usize, 1, 2, 3]).prop_shuffle(),
    ) {
        let guess: Vec<Digit> = order.iter().map(|&i| secret.digits()[i]).collect();
        let result = score(&secret, &guess).unwrap();

        prop_assert_eq!(result.bulls + result.cows, 4);
        let fixed_points = order.iter().enumerate().filter(|(i, j)| i == *j).count();
        prop_assert_eq!(result.bulls, fixed_points);
    }

    #[test]
    fn test_score_is_symmetric_for_distinct_digits(
        a in secret_strategy(4),
        b in secret_strategy(4),
    ) {
        let forward = score(&a, b.digits()).unwrap();
        let backward = score(&b, a.digits()).unwrap();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn test_parse_guess_accepts_only_distinct_digits(input in "[0-9]{4}") {
        let unique: HashSet<char> = input.chars().collect();
        let parsed = parse_guess(&input, 4);
        prop_assert_eq!(parsed.is_ok(), unique.len() == 4);
    }
}
