use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_pong::core::GameState;
use tui_pong::term::{encode_diff_into, encode_full_into, FrameBuffer, GameView};
use tui_pong::types::{GameAction, Playfield};

fn bench_step(c: &mut Criterion) {
    let mut state = GameState::new(Playfield::default(), 12345);

    c.bench_function("game_step", |b| {
        b.iter(|| {
            black_box(state.step());
        })
    });
}

fn bench_apply_action(c: &mut Criterion) {
    let mut state = GameState::new(Playfield::default(), 12345);
    let mut up = true;

    c.bench_function("apply_paddle_move", |b| {
        b.iter(|| {
            let action = if up {
                GameAction::LeftUp
            } else {
                GameAction::LeftDown
            };
            up = !up;
            state.apply_action(black_box(action));
        })
    });
}

fn bench_render_into(c: &mut Criterion) {
    let mut state = GameState::new(Playfield::default(), 12345);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(80, 25);

    c.bench_function("render_into_80x25", |b| {
        b.iter(|| {
            state.step();
            view.render_into(black_box(&state.snapshot()), &mut fb);
        })
    });
}

fn bench_encode_full(c: &mut Criterion) {
    let state = GameState::new(Playfield::default(), 12345);
    let fb = GameView::default().render(&state.snapshot());
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("encode_full_80x25", |b| {
        b.iter(|| {
            out.clear();
            encode_full_into(black_box(&fb), &mut out).unwrap();
        })
    });
}

fn bench_encode_diff(c: &mut Criterion) {
    let mut state = GameState::new(Playfield::default(), 12345);
    let view = GameView::default();
    let prev = view.render(&state.snapshot());
    state.step();
    state.step();
    let next = view.render(&state.snapshot());
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("encode_diff_one_tick", |b| {
        b.iter(|| {
            out.clear();
            encode_diff_into(black_box(&prev), black_box(&next), &mut out).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_apply_action,
    bench_render_into,
    bench_encode_full,
    bench_encode_diff
);
criterion_main!(benches);
