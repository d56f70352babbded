//! Benchmarks for the search engine
//!
//! Measures full-trace BFS over open and walled grids at the grid sizes
//! the visualizer targets.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scout_grid::{Cell, Grid};
use scout_search::search;

/// Benchmark corner-to-corner search on open grids
fn bench_open_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_open_grid");

    for &size in &[5usize, 10, 20, 40] {
        let grid = Grid::open(size, size);
        let goal = Cell::new(size as i64 - 1, size as i64 - 1);

        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| search(black_box(grid), Cell::ORIGIN, black_box(goal)))
        });
    }
    group.finish();
}

/// Benchmark search through a serpentine maze (worst-case path length)
fn bench_serpentine(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_serpentine");

    for &size in &[11usize, 21] {
        // Alternating wall rows with a single gap at alternating ends
        let mut grid = Grid::open(size, size);
        for row in (1..size).step_by(2) {
            let gap = if (row / 2) % 2 == 0 { size - 1 } else { 0 };
            for col in 0..size {
                if col != gap {
                    grid.set_blocked(Cell::new(row as i64, col as i64), true);
                }
            }
        }
        let goal = Cell::new(size as i64 - 1, size as i64 - 1);

        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, grid| {
            b.iter(|| search(black_box(grid), Cell::ORIGIN, black_box(goal)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_open_grid, bench_serpentine);
criterion_main!(benches);
