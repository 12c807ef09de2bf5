use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};

use plum_rules::board_location::Coordinate;
use plum_rules::board_manager::BoardManager;

/// Italian game opening, ending with White to move.
const OPENING: &[((i8, i8), (i8, i8))] = &[
    ((4, 1), (4, 3)),
    ((4, 6), (4, 4)),
    ((6, 0), (5, 2)),
    ((1, 7), (2, 5)),
    ((5, 0), (2, 3)),
    ((5, 7), (2, 4)),
    ((2, 1), (2, 2)),
    ((6, 7), (5, 5)),
];

fn middlegame() -> BoardManager {
    let mut manager = BoardManager::new();
    for ((from_file, from_rank), (to_file, to_rank)) in OPENING {
        manager
            .perform_move(
                Coordinate::new(*from_file, *from_rank),
                Coordinate::new(*to_file, *to_rank),
            )
            .expect("opening move should be legal");
    }
    manager
}

fn bench_board_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_state");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let manager = middlegame();

    group.bench_function("update_board_state", |b| {
        b.iter(|| {
            let mut manager = manager.clone();
            black_box(manager.update_board_state().expect("kings present"))
        });
    });

    group.bench_function("legal_moves", |b| {
        b.iter(|| black_box(manager.legal_moves().expect("kings present").len()));
    });

    group.bench_function("draw_rules", |b| {
        b.iter(|| {
            black_box(manager.check_threefold_repetition_rule());
            black_box(manager.check_fifty_move_rule())
        });
    });

    group.finish();
}

criterion_group!(board_state_benches, bench_board_state);
criterion_main!(board_state_benches);
