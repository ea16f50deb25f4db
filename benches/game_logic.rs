use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tick_tetris::core::{rotated_shape, Board, GameConfig, GameSnapshot, GameState};
use tick_tetris::term::{FrameBuffer, GameView, Viewport};
use tick_tetris::types::{GameAction, MoveKind, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(GameConfig {
        seed: 12345,
        base_interval: 1,
    });

    c.bench_function("gravity_tick", |b| {
        b.iter(|| {
            black_box(state.tick());
            if state.game_over() {
                state.apply_action(GameAction::Restart);
            }
            state.drain_cues().for_each(drop);
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let mut board = Board::new();
    for x in 0..9 {
        board.set(x, 19, Some(PieceKind::S));
    }
    let shape = rotated_shape(PieceKind::T, 1);

    c.bench_function("collides", |b| {
        b.iter(|| board.collides(black_box(&shape), black_box(4), black_box(16)))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_spawn_next(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("spawn_next", |b| b.iter(|| state.spawn_next()));
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::with_seed(12345);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            state.try_move(MoveKind::Left);
            state.try_move(MoveKind::Right);
            state.try_move(MoveKind::Rotate);
            state.drain_cues().for_each(drop);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::with_seed(12345);
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(80, 24);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_collides,
    bench_line_clear,
    bench_spawn_next,
    bench_try_move,
    bench_render
);
criterion_main!(benches);
