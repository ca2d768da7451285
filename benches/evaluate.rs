use rps_arena::core::{GameRng, MoveSource, PlayerId};
use rps_arena::rules::{evaluate_round, Choice};

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        evaluating_two_player_round,
        evaluating_eight_player_round,
        evaluating_sixty_four_player_round,
}

fn random_round(players: u32) -> Vec<Choice> {
    let mut rng = GameRng::new(42);
    (0..players)
        .map(|id| Choice::new(PlayerId::new(id), rng.next_move()))
        .collect()
}

fn evaluating_two_player_round(c: &mut criterion::Criterion) {
    let choices = random_round(2);
    c.bench_function("evaluate a 2-player round", |b| {
        b.iter(|| evaluate_round(&choices))
    });
}

fn evaluating_eight_player_round(c: &mut criterion::Criterion) {
    let choices = random_round(8);
    c.bench_function("evaluate an 8-player round", |b| {
        b.iter(|| evaluate_round(&choices))
    });
}

fn evaluating_sixty_four_player_round(c: &mut criterion::Criterion) {
    let choices = random_round(64);
    c.bench_function("evaluate a 64-player round", |b| {
        b.iter(|| evaluate_round(&choices))
    });
}
