criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        scanning_opening_moves,
        enumerating_opening_moves,
        scanning_bear_off_moves,
        playing_random_game,
}

fn scanning_opening_moves(c: &mut criterion::Criterion) {
    let board = Board::opening();
    c.bench_function("scan the opening for any legal move", |b| {
        b.iter(|| board.has_any_legal_move(Color::White, &[6, 5]))
    });
}

fn enumerating_opening_moves(c: &mut criterion::Criterion) {
    let board = Board::opening();
    c.bench_function("enumerate every legal move at the opening", |b| {
        b.iter(|| board.legal(Color::White, &[6, 5]))
    });
}

fn scanning_bear_off_moves(c: &mut criterion::Criterion) {
    let board = Board::empty()
        .with(0, Color::White, 3)
        .with(2, Color::White, 4)
        .with(4, Color::White, 2)
        .with_borne_off(Color::White, 6)
        .with(19, Color::Black, 15);
    c.bench_function("scan a bear-off position", |b| {
        b.iter(|| board.legal(Color::White, &[6, 6, 6, 6]))
    });
}

fn playing_random_game(c: &mut criterion::Criterion) {
    c.bench_function("play a random game to completion", |b| {
        b.iter(|| {
            let mut game = Game::default();
            while !game.is_over() {
                let turn = game.turn();
                if game.roll(turn, Roll::random()).ok().flatten().is_some() {
                    game.advance();
                    continue;
                }
                while let Some(play) = game.legal().first().copied() {
                    match game.play(turn, play) {
                        Ok(moved) if moved.stall.is_none() && !game.is_over() => continue,
                        _ => break,
                    }
                }
                game.advance();
            }
            game.winner()
        })
    });
}

use tavla::Arbitrary;
use tavla::board::*;
use tavla::game::*;
