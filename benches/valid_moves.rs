use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use blokus_duo::core::GameRng;
use blokus_duo::{play_random_game, BlokusGame};

/// Positions after a fixed number of random plies.
fn gen_positions(plies: usize, n: usize) -> Vec<BlokusGame> {
    let mut rng = GameRng::new(0x5EED_B10C);
    (0..n)
        .map(|_| {
            let mut game = BlokusGame::new();
            play_random_game(&mut game, &mut rng.fork(), plies);
            game
        })
        .collect()
}

fn bench_get_valid_moves(c: &mut Criterion) {
    let mut g = c.benchmark_group("blokus_valid_moves");
    for &plies in &[0usize, 8, 16, 24] {
        let games = gen_positions(plies, 16);
        g.bench_with_input(BenchmarkId::new("get_valid_moves", plies), &games, |b, games| {
            b.iter(|| {
                for game in games {
                    black_box(game.get_valid_moves(black_box(game.current_player())));
                }
            })
        });
    }
    g.finish();
}

fn bench_check_game_over(c: &mut Criterion) {
    let games = gen_positions(16, 16);
    c.bench_function("check_game_over_mid_game", |b| {
        b.iter(|| {
            for game in &games {
                black_box(game.check_game_over(game.current_player()));
            }
        })
    });
}

criterion_group!(benches, bench_get_valid_moves, bench_check_game_over);
criterion_main!(benches);
