use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::time::Duration;
use common::SessionRng;
use common::tictactoe::{compute_best_move, Board, Player, Position};

fn position(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

fn bench_self_play_full_game() {
    let mut board = Board::new();
    let mut player = Player::X;
    let mut session_rng = SessionRng::from_random();

    while board.winner().is_none() {
        match compute_best_move(player, &board, &mut session_rng) {
            Ok(best) => {
                board.place(player, best.position).unwrap();
                player = player.opponent();
            }
            Err(_) => break,
        }
    }
}

fn bench_single_move_empty_board() {
    let board = Board::new();
    let mut session_rng = SessionRng::from_random();
    compute_best_move(Player::X, &board, &mut session_rng).unwrap();
}

fn bench_single_move_mid_game() {
    let board = Board::replay([
        (Player::X, position(0, 0)),
        (Player::O, position(1, 1)),
        (Player::X, position(2, 2)),
    ])
    .unwrap();
    let mut session_rng = SessionRng::from_random();
    compute_best_move(Player::O, &board, &mut session_rng).unwrap();
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("self_play_full_game", |b| {
        b.iter(bench_self_play_full_game)
    });

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
