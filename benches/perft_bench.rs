use criterion::{black_box, criterion_group, criterion_main, Criterion};
use monkfish::chess::Board;
use monkfish::perft::perft;
use monkfish::search::Engine;

fn bench_perft(c: &mut Criterion) {
    c.bench_function("perft_depth_4_startpos", |b| {
        let mut board = Board::starting_position();
        b.iter(|| black_box(perft(&mut board, 4)))
    });
}

fn bench_search(c: &mut Criterion) {
    c.bench_function("search_depth_5_startpos", |b| {
        b.iter(|| {
            let mut engine = Engine::new(16);
            let mut board = Board::starting_position();
            black_box(engine.search_to_depth(&mut board, 5))
        })
    });
}

criterion_group!(benches, bench_perft, bench_search);
criterion_main!(benches);
