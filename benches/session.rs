use criterion::{black_box, criterion_group, criterion_main, Criterion};

use hazard_ladder::core::{BoardConfig, GameRng, SessionConfig};
use hazard_ladder::events::NullSink;
use hazard_ladder::layout::generate_layout;
use hazard_ladder::session::SessionRunner;

fn bench_layout(c: &mut Criterion) {
    let board = BoardConfig::default();
    let mut rng = GameRng::new(42);
    c.bench_function("generate_layout", |b| {
        b.iter(|| generate_layout(black_box(&board), &mut rng))
    });
}

fn bench_session(c: &mut Criterion) {
    c.bench_function("session_100x10", |b| {
        b.iter(|| {
            let config = SessionConfig::new(100, 10, 50.0).with_seed(7);
            SessionRunner::new(config).run_with_sink(&mut NullSink)
        })
    });
}

criterion_group!(benches, bench_layout, bench_session);
criterion_main!(benches);
