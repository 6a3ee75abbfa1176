use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use bulls_cows::{
    Secret, Session,
    game::{parse_guess, score},
};
use std::hint::black_box;

/// Helper to create an active session with N players
fn setup_game_with_players(n_players: usize) -> Session {
    let mut game = Session::with_secret("0123".parse().unwrap());
    for i in 0..n_players {
        game.join(i as i64, format!("player{i}")).unwrap();
    }
    game.start().unwrap();
    game
}

/// Benchmark scoring a distinct-digit guess
fn bench_score(c: &mut Criterion) {
    let secret: Secret = "1234".parse().unwrap();
    let guess: [u8; 4] = [1, 2, 4, 3];

    c.bench_function("score_4_digits", |b| {
        b.iter(|| score(black_box(&secret), black_box(&guess[..])));
    });
}

/// Benchmark guess validation
fn bench_parse_guess(c: &mut Criterion) {
    c.bench_function("parse_guess_4_digits", |b| {
        b.iter(|| parse_guess(black_box(" 9071 "), 4));
    });
}

/// Benchmark secret generation at several lengths
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("secret_generate");
    for len in [4usize, 6, 10] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter(|| Secret::generate(len));
        });
    }
    group.finish();
}

/// Benchmark a full rotation of non-winning guesses
fn bench_guess_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("guess_rotation");
    for n_players in [2usize, 5, 10] {
        group.bench_with_input(
            BenchmarkId::from_parameter(n_players),
            &n_players,
            |b, &n| {
                b.iter_batched(
                    || setup_game_with_players(n),
                    |mut game| {
                        for i in 0..n {
                            let _ = game.guess(i as i64, "4567");
                        }
                        game
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_score,
    bench_parse_guess,
    bench_generate,
    bench_guess_rotation
);
criterion_main!(benches);
