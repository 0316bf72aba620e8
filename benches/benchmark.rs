use advent2023::{default_input, solutions, ALL_SOLUTIONS};
use criterion::{criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    for (i, day) in ALL_SOLUTIONS.iter().enumerate() {
        c.bench_function(&format!("day{}", i + 1), |b| {
            let input = default_input(i + 1);
            b.iter(|| day(&input))
        });
    }
}

// Runs without puzzle inputs on disk, useful for quick comparisons.
pub fn pipe_maze_benchmark(c: &mut Criterion) {
    let input = "...........\n\
                 .S-------7.\n\
                 .|F-----7|.\n\
                 .||.....||.\n\
                 .||.....||.\n\
                 .|L-7.F-J|.\n\
                 .|..|.|..|.\n\
                 .L--J.L--J.\n\
                 ...........\n";
    c.bench_function("day10_example", |b| b.iter(|| solutions::day10(input)));
}

criterion_group!(benches, criterion_benchmark, pipe_maze_benchmark);
criterion_main!(benches);
