//! Benchmarks for the three search strategies across grid sizes, grounded
//! on the bench suite shipped by the `pathfinding` crate
//! (`evenfurther-pathfinding`'s `benches/algos.rs`).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fieldpath::find_path_2d;

fn checkerboard(w: usize, h: usize) -> Vec<u8> {
    (0..w * h)
        .map(|i| {
            let (x, y) = (i % w, i / w);
            if (x + y) % 7 == 0 {
                5
            } else {
                200
            }
        })
        .collect()
}

fn bench_grid2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid2d");
    for size in [16usize, 64, 256] {
        let data = checkerboard(size, size);
        for algorithm in ["dijkstra", "astar", "fringe"] {
            group.bench_with_input(
                BenchmarkId::new(algorithm, size),
                &size,
                |b, &size| {
                    b.iter(|| {
                        find_path_2d(
                            black_box(&data),
                            size,
                            size,
                            (0, 0),
                            (size - 1, size - 1),
                            algorithm,
                        )
                        .unwrap()
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_grid2d);
criterion_main!(benches);
