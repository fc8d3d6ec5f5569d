use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ascii_blast::core::scene;
use ascii_blast::term::{encode_full_into, BoardView};

fn bench_tick(c: &mut Criterion) {
    c.bench_function("standard_scene_tick", |b| {
        b.iter_batched(
            scene::standard,
            |mut board| black_box(board.tick()),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_settle(c: &mut Criterion) {
    c.bench_function("standard_scene_settle", |b| {
        b.iter(|| {
            let mut board = scene::standard();
            while !board.is_settled() {
                board.tick();
            }
            black_box(board.counts())
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut board = scene::standard();
    for _ in 0..20 {
        board.tick();
    }
    let view = BoardView::default();
    let vp = view.full_viewport();
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("render_and_encode_full_frame", |b| {
        b.iter(|| {
            let fb = view.render(black_box(&board), false, vp);
            out.clear();
            encode_full_into(&fb, &mut out).unwrap();
            black_box(out.len())
        })
    });
}

criterion_group!(benches, bench_tick, bench_settle, bench_render);
criterion_main!(benches);
